//! Application State
//!
//! Shared state accessible by all handlers. The dispatcher is immutable
//! after startup, so handlers share it through an `Arc` without locking.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::routing::Dispatcher;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Route dispatcher used for resolution and SPA status codes
    pub dispatcher: Arc<Dispatcher>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// State with the storefront dispatcher
    pub fn new(config: ServerConfig) -> Self {
        Self::with_dispatcher(Dispatcher::storefront(), config)
    }

    pub fn with_dispatcher(dispatcher: Dispatcher, config: ServerConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
