//! Routing error types
//!
//! Errors raised while building a route table. Dispatching a path never
//! fails; every error here happens at construction time.

use thiserror::Error;

/// Errors that can occur while parsing patterns or assembling a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Pattern text could not be parsed
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A parameter name appears twice in the same pattern
    #[error("Duplicate parameter ':{name}' in route pattern '{pattern}'")]
    DuplicateParam { pattern: String, name: String },

    /// The table was built without a catch-all entry
    #[error("Route table has no catch-all entry")]
    MissingCatchAll,

    /// A route was registered after the catch-all and could never match
    #[error("Route '{0}' registered after the catch-all entry")]
    RouteAfterCatchAll(String),
}

/// Result type for routing construction
pub type RoutingResult<T> = Result<T, RoutingError>;
