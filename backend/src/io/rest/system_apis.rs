//! Liveness and build information endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::HealthStatus;
use tracing::debug;

use crate::AppState;

pub async fn health() -> impl IntoResponse {
    debug!("GET /api/health");

    let status = HealthStatus {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(status))
}

pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/version");

    (StatusCode::OK, Json(state.version.clone()))
}
