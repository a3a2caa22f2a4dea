//! TrailMate Gateway: HTTP surface for the travel companion app.
//! Mock itinerary generation, catalog reads, form checks and per-device SOS sessions.

mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trailmate_core::GatewayConfig;

use crate::handlers::{account, catalog, itinerary, sos};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::load().unwrap_or_else(|e| {
        tracing::warn!("[TRAILMATE SYSTEM] Config load failed ({}); using defaults", e);
        GatewayConfig::default()
    });
    let addr = config.bind_addr();
    tracing::info!(
        "[TRAILMATE SYSTEM] {} v{} listening on {}",
        config.app_name,
        trailmate_core::version(),
        addr
    );

    let state = Arc::new(AppState::from_config(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("[TRAILMATE SYSTEM] Gateway stopped");
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors_permissive = state.config.cors_permissive;
    let app = Router::new()
        .route("/health", get(health))
        .route("/api/generate-itinerary", post(itinerary::generate_itinerary))
        .route("/api/plan-trip", post(itinerary::plan_trip))
        .route("/api/trip-form/options", get(itinerary::trip_form_options))
        .route("/api/destinations", get(catalog::destinations))
        .route("/api/destinations/saved", get(catalog::saved_destinations))
        .route("/api/destinations/:id/save", post(catalog::toggle_saved))
        .route("/api/trips", get(catalog::trips))
        .route("/api/community/feed", get(catalog::feed))
        .route("/api/community/posts/:id/like", post(catalog::toggle_like))
        .route("/api/community/travelers", get(catalog::travelers))
        .route("/api/profile", get(catalog::profile))
        .route("/api/emergency/contacts", get(catalog::emergency_contacts))
        .route("/api/emergency/contacts/:index/call", get(catalog::call_prompt))
        .route("/api/emergency/nearby", get(catalog::nearby_services))
        .route("/api/auth", post(account::auth))
        .route("/api/profile-setup", post(account::profile_setup))
        .route("/api/profile-setup/adjust", post(account::adjust_profile))
        .route("/api/sos/:device", get(sos::status))
        .route("/api/sos/:device/activate", post(sos::activate))
        .route("/api/sos/:device/cancel", post(sos::cancel))
        .route("/api/sos/:device/acknowledge", post(sos::acknowledge))
        .route("/api/sos/:device/share-location", post(sos::share_location))
        .route("/api/sos/:device/events", get(sos::events))
        .route("/sos/:device/card", get(sos::card))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_traffic));

    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

async fn log_traffic(
    connect: Option<ConnectInfo<SocketAddr>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let peer = connect
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "local".to_string());
    tracing::info!(
        "[TRAILMATE SYSTEM] {} {} from {}",
        request.method(),
        request.uri().path(),
        peer
    );
    next.run(request).await
}

async fn health() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("[TRAILMATE SYSTEM] Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}
