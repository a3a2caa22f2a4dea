//! HTTP handlers, grouped by screen.

pub mod account;
pub mod catalog;
pub mod itinerary;
pub mod sos;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use trailmate_core::FormError;

pub type ApiError = (StatusCode, Json<Value>);

/// Blocking-prompt error body for a failed form.
pub fn form_error(err: &FormError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "title": err.title(),
            "error": err.to_string(),
        })),
    )
}

pub fn not_found(what: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": format!("{} not found", what) })),
    )
}
