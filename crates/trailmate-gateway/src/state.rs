//! Shared gateway state: injected catalog, services, toggles and per-device SOS sessions.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use trailmate_core::{
    AlertSession, Catalog, DispatchNotifier, GatewayConfig, ItineraryService, LiveAlertSession, MockItineraryService,
    TickScheduler, ToggleSet, TokioScheduler, TracingNotifier, WebhookNotifier,
};

pub struct AppState {
    pub config: GatewayConfig,
    pub catalog: Arc<Catalog>,
    pub itineraries: Arc<dyn ItineraryService>,
    pub scheduler: Arc<dyn TickScheduler>,
    pub notifier: Arc<dyn DispatchNotifier>,
    /// Live SOS sessions by device id. A device with no entry is `Idle`.
    pub sessions: DashMap<String, Arc<LiveAlertSession>>,
    pub saved_destinations: RwLock<ToggleSet<u32>>,
    pub liked_posts: RwLock<ToggleSet<u32>>,
}

impl AppState {
    pub fn from_config(config: GatewayConfig) -> Self {
        let notifier: Arc<dyn DispatchNotifier> = match config.dispatch_webhook_url.as_deref() {
            Some(url) => {
                let webhook = WebhookNotifier::new(url);
                tracing::info!("[TRAILMATE SYSTEM] SOS dispatch webhook: {}", webhook.url());
                Arc::new(webhook)
            }
            None => Arc::new(TracingNotifier),
        };
        let itineraries = Arc::new(MockItineraryService::new(config.itinerary_delay()));
        Self::with_services(config, itineraries, Arc::new(TokioScheduler), notifier)
    }

    pub fn with_services(
        config: GatewayConfig,
        itineraries: Arc<dyn ItineraryService>,
        scheduler: Arc<dyn TickScheduler>,
        notifier: Arc<dyn DispatchNotifier>,
    ) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::builtin()),
            itineraries,
            scheduler,
            notifier,
            sessions: DashMap::new(),
            saved_destinations: RwLock::new(Catalog::initial_saved()),
            liked_posts: RwLock::new(Catalog::initial_liked()),
        }
    }

    /// Session for `device`, created `Idle` on first use.
    pub fn session(&self, device: &str) -> Arc<LiveAlertSession> {
        let entry = self.sessions.entry(device.to_string()).or_insert_with(|| {
            tracing::info!("[TRAILMATE SOS] New session for device {}", device);
            Arc::new(LiveAlertSession::new(
                device,
                Arc::clone(&self.scheduler),
                Arc::clone(&self.notifier),
                self.catalog.contacts.clone(),
            ))
        });
        Arc::clone(entry.value())
    }

    /// Current state for `device` without creating a session.
    pub fn snapshot(&self, device: &str) -> AlertSession {
        self.sessions
            .get(device)
            .map(|session| session.snapshot())
            .unwrap_or_default()
    }

    /// Drops the session for `device` once it has settled back to the initial state with no
    /// timer and no request holding it.
    pub fn release_if_settled(&self, device: &str) {
        let removed = self.sessions.remove_if(device, |_, session| {
            Arc::strong_count(session) == 1
                && !session.has_timer()
                && session.snapshot() == AlertSession::default()
        });
        if let Some((_, session)) = removed {
            tracing::info!("[TRAILMATE SOS] Released idle session for device {}", session.device());
        }
    }
}
