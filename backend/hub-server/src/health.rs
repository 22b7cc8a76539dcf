use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status, version and allow-list mode
pub async fn health_check(State(state): State<AppState>) -> Response {
    let allow_list = if state.provisioner.registry().allow_list_enabled().await {
        "enabled"
    } else {
        "disabled"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "provisioner": "operational",
            "allow_list": allow_list,
        },
        "timestamp": humantime::format_rfc3339(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness check
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness check
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
