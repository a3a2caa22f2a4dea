//! TrailMate core library.
//! SOS alert flow, mock itinerary service, and the shared catalog/forms types used by the gateway.

pub mod alert;
pub mod catalog;
pub mod config;
pub mod contacts;
pub mod countdown;
pub mod dispatch;
pub mod forms;
pub mod itinerary;
pub mod theme;
pub mod toggles;

pub use alert::{AlertSession, AlertStatus, ConfirmationPrompt, EmergencyAlertController, ShareOrigin, Transition, COUNTDOWN_SECS};
pub use catalog::{Catalog, Destination, FeedPost, Traveler, TripStatus, TripSummary, UserProfile};
pub use config::GatewayConfig;
pub use contacts::{ContactCategory, EmergencyContact, NearbyService};
pub use countdown::{LiveAlertSession, TickScheduler, TimerHandle, TokioScheduler};
pub use dispatch::{DispatchNotice, DispatchNotifier, TracingNotifier, WebhookNotifier};
pub use forms::{AuthForm, FormError, ProfileForm, TripForm};
pub use itinerary::{GeneratedItinerary, ItineraryError, ItineraryService, MockItineraryService, TripRequest};
pub use theme::Theme;
pub use toggles::ToggleSet;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
