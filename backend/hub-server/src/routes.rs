use crate::{AppState, authorize_account, create_account, health, list_allowlist, spawn_plan};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_allowed_origins);

    Router::new()
        // Account endpoints (bearer token required)
        .route("/api/accounts", post(create_account))
        .route("/api/accounts/{name}/authorization", get(authorize_account))
        .route("/api/accounts/{name}/spawn", get(spawn_plan))
        .route("/api/allowlist", get(list_allowlist))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(cors)
}

/// Only the configured origins; an empty list admits no browser origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
