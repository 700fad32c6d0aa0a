//! SPA Shell
//!
//! Fallback for every request the API does not handle. Page navigations
//! receive the SPA entry document; the status code follows the
//! dispatcher, so catch-all pages answer 404 while still rendering the
//! shell. Paths the route table does not know are first tried as static
//! assets from the bundle directory.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Fallback handler: static assets, then the SPA shell
pub async fn spa_fallback(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> ApiResult<Response> {
    let method = request.method().clone();
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed(method.to_string()));
    }

    let dispatch = state.dispatcher.dispatch(request.uri().path());

    if dispatch.page.is_not_found() {
        let response = match ServeDir::new(&state.config.static_dir).oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        if response.status() != StatusCode::NOT_FOUND {
            return Ok(response.into_response());
        }
    }

    let html = read_index(&state).await?;
    let status = if dispatch.page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    tracing::debug!(path = %dispatch.path, page = %dispatch.page, status = %status, "Serving shell");
    Ok((status, Html(html)).into_response())
}

async fn read_index(state: &AppState) -> ApiResult<String> {
    let index = state.config.index_path();
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ApiError::ServiceUnavailable(
            format!("frontend bundle not found at {:?}", index),
        )),
        Err(e) => Err(ApiError::Io(e)),
    }
}
