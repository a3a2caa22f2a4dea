//! Light/dark palette and the HTML status card for the Safety Center.
//! The theme is always passed in explicitly; nothing reads a global color scheme.

use serde::{Deserialize, Serialize};

use crate::alert::{AlertSession, AlertStatus};

pub const BRAND_TEAL: &str = "#7ACFD6";
pub const BRAND_NAVY: &str = "#0F2C4C";
pub const ALERT_RED: &str = "#DC2626";
pub const ALERT_RED_DARK: &str = "#991B1B";
pub const CREAM: &str = "#FFF9F4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

impl Theme {
    /// Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: CREAM,
                surface: "#FFFFFF",
                text: BRAND_NAVY,
                muted: "#6B7280",
            },
            Theme::Dark => Palette {
                background: "#121212",
                surface: "#1E1E1E",
                text: CREAM,
                muted: "#9CA3AF",
            },
        }
    }
}

/// Header gradient: red while an alert is live, brand colors otherwise.
pub fn header_gradient(status: AlertStatus) -> (&'static str, &'static str) {
    match status {
        AlertStatus::Idle => (BRAND_TEAL, BRAND_NAVY),
        AlertStatus::CountingDown | AlertStatus::Dispatched => (ALERT_RED, ALERT_RED_DARK),
    }
}

/// HTML fragment for the SOS status card.
pub fn render_status_card(session: &AlertSession, theme: Theme) -> String {
    let palette = theme.palette();
    let (from, to) = header_gradient(session.status);
    let (headline, detail) = match session.status {
        AlertStatus::Idle => (
            "Safety Center",
            "Your safety is our priority. Access emergency help instantly.".to_string(),
        ),
        AlertStatus::CountingDown => (
            "Emergency Alert Active",
            format!("Sending in {}s", session.seconds_remaining),
        ),
        AlertStatus::Dispatched => (
            "Emergency Alert Active",
            "Alert sent to emergency contacts".to_string(),
        ),
    };
    let location = if session.location_shared {
        r#"<p class="sos-location">Location shared with contacts</p>"#
    } else {
        ""
    };
    format!(
        r#"<div class="sos-card" style="background-color: {}; color: {};"><header style="background: linear-gradient({}, {}); color: {};"><h2>{}</h2></header><p class="sos-detail" style="color: {};">{}</p>{}</div>"#,
        palette.surface,
        palette.text,
        from,
        to,
        CREAM,
        html_escape(headline),
        palette.muted,
        html_escape(&detail),
        location
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
