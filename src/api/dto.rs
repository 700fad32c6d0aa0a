//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::routing::{Dispatch, RouteSummary};

// ============================================
// RESOLVE DTOs
// ============================================

/// Query string for `GET /api/v1/resolve`
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Navigation path to dispatch
    #[serde(default)]
    pub path: Option<String>,
}

/// Dispatch decision for one path
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub dispatch: Dispatch,
    /// Title of the selected page
    pub title: String,
}

// ============================================
// ROUTE TABLE DTOs
// ============================================

/// Route table listing
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Entries in evaluation order
    pub routes: Vec<RouteSummary>,
    /// Paths on which chrome is hidden
    pub chrome_hidden_on: Vec<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" when the SPA entry document is present, "missing" otherwise
    pub bundle: String,
    /// Number of route table entries
    pub routes: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
