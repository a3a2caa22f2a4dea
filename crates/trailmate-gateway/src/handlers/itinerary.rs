//! Itinerary generation: the raw mock endpoint and the validated trip form.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use trailmate_core::forms::{SafetyLevel, MAX_SAFETY_LEVEL, MIN_SAFETY_LEVEL, VIBE_OPTIONS};
use trailmate_core::{ItineraryError, TripForm, TripRequest};

use super::{form_error, ApiError};
use crate::state::AppState;

fn generation_failed(err: &ItineraryError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": err.to_string() })),
    )
}

async fn run(state: &AppState, request: &TripRequest) -> Result<Json<Value>, ApiError> {
    let itinerary = state.itineraries.generate(request).await.map_err(|e| {
        tracing::error!("[TRAILMATE ITINERARY] Error generating itinerary: {}", e);
        generation_failed(&e)
    })?;
    Ok(Json(json!({ "success": true, "itinerary": itinerary })))
}

/// POST /api/generate-itinerary: no validation beyond reading the fields; an unreadable body
/// is reported as a generation failure.
pub async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!("[TRAILMATE ITINERARY] Error generating itinerary: {}", rejection);
        generation_failed(&ItineraryError::Generation)
    })?;
    run(&state, &request).await
}

/// POST /api/plan-trip: itinerary input screen submit.
pub async fn plan_trip(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TripForm>,
) -> Result<Json<Value>, ApiError> {
    let request = form.validate().map_err(|e| form_error(&e))?;
    run(&state, &request).await
}

/// GET /api/trip-form/options: vibe chips and safety levels for the input screen.
pub async fn trip_form_options() -> Json<Value> {
    let vibes: Vec<Value> = VIBE_OPTIONS
        .iter()
        .map(|(id, label)| json!({ "id": id, "label": label }))
        .collect();
    let levels: Vec<Value> = (MIN_SAFETY_LEVEL..=MAX_SAFETY_LEVEL)
        .filter_map(SafetyLevel::from_level)
        .map(|l| json!({ "level": l as u8, "label": l.label(), "description": l.description() }))
        .collect();
    Json(json!({ "vibes": vibes, "safetyLevels": levels }))
}
