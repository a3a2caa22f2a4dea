//! SOS sessions over HTTP. Every call answers with `{applied, session}`; calls that do not
//! apply to the current state are reported with `applied: false`, never as errors.
//! Reads never create a session, and a session that settles back to idle is released.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::Json;
use futures_util::stream::{self, Stream};
use serde::Deserialize;
use serde_json::{json, Value};
use trailmate_core::theme::render_status_card;
use trailmate_core::{LiveAlertSession, Theme, Transition};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ActivateBody {
    #[serde(default)]
    confirmed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    theme: Option<String>,
}

/// Runs `op` against the device's session, then releases the session if it has settled.
fn apply(state: &AppState, device: &str, op: impl FnOnce(&LiveAlertSession) -> Transition) -> Json<Value> {
    let (transition, snapshot) = {
        let session = state.session(device);
        let transition = op(&session);
        (transition, session.snapshot())
    };
    state.release_if_settled(device);
    Json(json!({
        "applied": transition.applied(),
        "session": snapshot,
    }))
}

pub async fn status(State(state): State<Arc<AppState>>, Path(device): Path<String>) -> Json<Value> {
    let session = state.snapshot(&device);
    Json(json!({ "device": device, "session": session }))
}

/// Activation needs `{"confirmed": true}`; a missing body counts as declined.
pub async fn activate(
    State(state): State<Arc<AppState>>,
    Path(device): Path<String>,
    body: Option<Json<ActivateBody>>,
) -> Json<Value> {
    let confirmed = body.map(|Json(b)| b.confirmed).unwrap_or(false);
    apply(&state, &device, |session| session.activate(&confirmed))
}

pub async fn cancel(State(state): State<Arc<AppState>>, Path(device): Path<String>) -> Json<Value> {
    apply(&state, &device, LiveAlertSession::cancel)
}

pub async fn acknowledge(State(state): State<Arc<AppState>>, Path(device): Path<String>) -> Json<Value> {
    apply(&state, &device, LiveAlertSession::acknowledge)
}

pub async fn share_location(State(state): State<Arc<AppState>>, Path(device): Path<String>) -> Json<Value> {
    apply(&state, &device, LiveAlertSession::share_location)
}

/// GET /sos/:device/card: themed HTML status card.
pub async fn card(
    State(state): State<Arc<AppState>>,
    Path(device): Path<String>,
    Query(q): Query<ThemeQuery>,
) -> Html<String> {
    let theme = q.theme.as_deref().map(Theme::parse).unwrap_or_default();
    Html(render_status_card(&state.snapshot(&device), theme))
}

/// GET /api/sos/:device/events: session snapshot once a second as SSE.
pub async fn events(
    State(state): State<Arc<AppState>>,
    Path(device): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let interval = tokio::time::interval(Duration::from_secs(1));
    let stream = stream::unfold((state, device, interval), |(state, device, mut interval)| async move {
        interval.tick().await;
        let event = Event::default()
            .event("session")
            .json_data(state.snapshot(&device))
            .unwrap_or_else(|_| Event::default().comment("snapshot encode failed"));
        Some((Ok(event), (state, device, interval)))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
