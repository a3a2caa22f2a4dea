//! Dispatch notifications sent when an SOS countdown runs out.
//! Fire-and-forget: no retry and no delivery tracking.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alert::AlertSession;
use crate::contacts::EmergencyContact;

/// Payload handed to every notifier on `Dispatched` entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchNotice {
    pub id: uuid::Uuid,
    pub device: String,
    pub dispatched_at: DateTime<Utc>,
    pub location_shared: bool,
    pub contacts: Vec<EmergencyContact>,
}

impl DispatchNotice {
    pub fn new(device: &str, session: &AlertSession, contacts: Vec<EmergencyContact>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            device: device.to_string(),
            dispatched_at: Utc::now(),
            location_shared: session.location_shared,
            contacts,
        }
    }
}

pub trait DispatchNotifier: Send + Sync {
    fn notify(&self, notice: &DispatchNotice);
}

/// Logs the notice. Default when no webhook is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl DispatchNotifier for TracingNotifier {
    fn notify(&self, notice: &DispatchNotice) {
        let recipients: Vec<&str> = notice.contacts.iter().map(|c| c.name.as_str()).collect();
        tracing::warn!(
            notice_id = %notice.id,
            device = %notice.device,
            location_shared = notice.location_shared,
            "[TRAILMATE SOS] Emergency alert dispatched to {}",
            recipients.join(", ")
        );
    }
}

/// POSTs the notice as JSON to a partner endpoint on the current tokio runtime.
/// Delivery failures are logged and dropped.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DispatchNotifier for WebhookNotifier {
    fn notify(&self, notice: &DispatchNotice) {
        TracingNotifier.notify(notice);
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("[TRAILMATE SOS] No runtime for webhook dispatch; notice {} logged only", notice.id);
            return;
        };
        let client = self.client.clone();
        let url = self.url.clone();
        let body = notice.clone();
        handle.spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(res) if res.status().is_success() => {
                    tracing::info!("[TRAILMATE SOS] Webhook accepted notice {}", body.id);
                }
                Ok(res) => {
                    tracing::warn!("[TRAILMATE SOS] Webhook {} answered {} for notice {}", url, res.status(), body.id);
                }
                Err(e) => {
                    tracing::warn!("[TRAILMATE SOS] Webhook {} unreachable: {}", url, e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertStatus, ShareOrigin};
    use crate::contacts::emergency_contacts;

    #[test]
    fn notice_carries_session_share_flag() {
        let session = AlertSession {
            status: AlertStatus::Dispatched,
            seconds_remaining: 0,
            location_shared: true,
            share_origin: Some(ShareOrigin::Dispatch),
        };
        let notice = DispatchNotice::new("pixel-7", &session, emergency_contacts());
        assert!(notice.location_shared);
        assert_eq!(notice.device, "pixel-7");

        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["locationShared"], true);
        assert_eq!(json["contacts"][1]["dialNumber"], "108");
    }

    #[test]
    fn webhook_without_runtime_does_not_panic() {
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/hook");
        let notice = DispatchNotice::new("d", &AlertSession::default(), Vec::new());
        notifier.notify(&notice);
    }
}
