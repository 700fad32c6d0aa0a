//! Resolve Routes
//!
//! Expose the dispatcher's decisions over HTTP.
//!
//! - GET /api/v1/resolve?path=... - Dispatch a single path
//! - GET /api/v1/routes - List the route table

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ResolveQuery, ResolveResponse, RoutesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/resolve
pub async fn resolve_path(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<Json<ResolveResponse>> {
    let path = query
        .path
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("query parameter 'path' is required".to_string()))?;

    let dispatch = state.dispatcher.dispatch(&path);
    let title = dispatch.page.title().to_string();

    Ok(Json(ResolveResponse { dispatch, title }))
}

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: state.dispatcher.table().summaries(),
        chrome_hidden_on: state.dispatcher.chrome().hidden_paths().to_vec(),
    })
}
