//! Mock sign-in and profile setup. Nothing is stored; a valid form just names the next route.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use trailmate_core::forms::Step;
use trailmate_core::{AuthForm, ProfileForm};

use super::{form_error, ApiError};

pub async fn auth(Json(form): Json<AuthForm>) -> Result<Json<Value>, ApiError> {
    let next = form.validate().map_err(|e| form_error(&e))?;
    tracing::info!("[TRAILMATE SYSTEM] Mock {:?} accepted", form.mode);
    Ok(Json(json!({ "success": true, "next": next })))
}

pub async fn profile_setup(Json(form): Json<ProfileForm>) -> Result<Json<Value>, ApiError> {
    let next = form.validate().map_err(|e| form_error(&e))?;
    Ok(Json(json!({ "success": true, "next": next })))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Budget,
    Safety,
}

#[derive(Deserialize)]
pub struct AdjustRequest {
    form: ProfileForm,
    field: Field,
    step: Step,
}

/// POST /api/profile-setup/adjust: budget and safety stepper buttons.
pub async fn adjust_profile(Json(req): Json<AdjustRequest>) -> Json<ProfileForm> {
    let mut form = req.form;
    match req.field {
        Field::Budget => form.step_budget(req.step),
        Field::Safety => form.step_safety(req.step),
    }
    Json(form)
}
