//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (bundle present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the frontend bundle can be served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if bundle_present(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let bundle_ok = bundle_present(&state).await;

    Json(HealthResponse {
        status: if bundle_ok { "healthy" } else { "degraded" }.to_string(),
        bundle: if bundle_ok { "ok" } else { "missing" }.to_string(),
        routes: state.dispatcher.table().len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn bundle_present(state: &AppState) -> bool {
    tokio::fs::try_exists(state.config.index_path())
        .await
        .unwrap_or(false)
}
