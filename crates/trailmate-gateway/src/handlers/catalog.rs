//! Explore, Itinerary, Community, Profile and Safety Center reads, plus the save/like toggles.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use trailmate_core::catalog::{trip_tabs, ALL_TRIPS_TAB, DESTINATION_FILTERS};
use trailmate_core::{Destination, FeedPost};

use super::{not_found, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    filter: Option<String>,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Serialize)]
struct DestinationCard<'a> {
    #[serde(flatten)]
    destination: &'a Destination,
    saved: bool,
}

#[derive(Serialize)]
struct FeedCard<'a> {
    #[serde(flatten)]
    post: &'a FeedPost,
    liked: bool,
}

pub async fn destinations(State(state): State<Arc<AppState>>, Query(q): Query<FilterQuery>) -> Json<Value> {
    let filter = q.filter.unwrap_or_else(|| "All".to_string());
    let saved = state.saved_destinations.read().await;
    let cards: Vec<DestinationCard> = state
        .catalog
        .destinations_matching(&filter)
        .into_iter()
        .map(|d| DestinationCard {
            destination: d,
            saved: saved.contains(&d.id),
        })
        .collect();
    Json(json!({
        "filter": filter,
        "filters": DESTINATION_FILTERS,
        "destinations": cards,
    }))
}

pub async fn toggle_saved(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> Result<Json<Value>, ApiError> {
    if state.catalog.destination(id).is_none() {
        return Err(not_found("destination"));
    }
    let saved = state.saved_destinations.write().await.toggle(id);
    Ok(Json(json!({ "id": id, "saved": saved })))
}

pub async fn saved_destinations(State(state): State<Arc<AppState>>) -> Json<Value> {
    let ids = state.saved_destinations.read().await.to_vec();
    Json(json!({ "saved": ids }))
}

pub async fn trips(State(state): State<Arc<AppState>>, Query(q): Query<StatusQuery>) -> Json<Value> {
    let tab = q.status.unwrap_or_else(|| ALL_TRIPS_TAB.to_string());
    let trips = state.catalog.trips_with_status(&tab);
    let tabs: Vec<Value> = trip_tabs()
        .into_iter()
        .map(|(key, label)| json!({ "key": key, "label": label }))
        .collect();
    Json(json!({ "status": tab, "tabs": tabs, "trips": trips }))
}

pub async fn feed(State(state): State<Arc<AppState>>) -> Json<Value> {
    let liked = state.liked_posts.read().await;
    let cards: Vec<FeedCard> = state
        .catalog
        .feed
        .iter()
        .map(|p| FeedCard {
            post: p,
            liked: liked.contains(&p.id),
        })
        .collect();
    Json(json!({ "posts": cards }))
}

pub async fn toggle_like(State(state): State<Arc<AppState>>, Path(id): Path<u32>) -> Result<Json<Value>, ApiError> {
    if state.catalog.post(id).is_none() {
        return Err(not_found("post"));
    }
    let liked = state.liked_posts.write().await.toggle(id);
    Ok(Json(json!({ "id": id, "liked": liked })))
}

pub async fn travelers(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "travelers": state.catalog.travelers }))
}

pub async fn profile(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "profile": state.catalog.profile }))
}

pub async fn emergency_contacts(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "contacts": state.catalog.contacts }))
}

/// GET /api/emergency/contacts/:index/call: confirmation prompt shown before dialing.
pub async fn call_prompt(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<Value>, ApiError> {
    let contact = state.catalog.contacts.get(index).ok_or_else(|| not_found("contact"))?;
    let (title, message) = contact.call_prompt();
    Ok(Json(json!({
        "title": title,
        "message": message,
        "dialNumber": contact.dial_number,
    })))
}

pub async fn nearby_services(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "services": state.catalog.nearby }))
}
