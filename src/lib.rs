//! # Storefront
//!
//! Routing shell of a small e-commerce storefront: maps the browser path to
//! a page and decides whether the navigation bar and sidebar are shown.
//!
//! ## Modules
//!
//! - [`routing`]: route patterns, the route table and the dispatcher
//! - [`config`]: TOML + environment configuration (feature `server`)
//! - [`logging`]: tracing subscriber setup (feature `server`)
//! - [`api`]: Axum server for the built bundle (feature `server`)
//!
//! The routing core has no server dependencies, so the `storefront-ui`
//! crate uses it with `default-features = false` on the wasm target.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront::{Dispatcher, Page};
//!
//! let dispatch = Dispatcher::storefront().dispatch("/dresses/summer");
//! assert_eq!(dispatch.page, Page::Home);
//! assert_eq!(dispatch.param("filter"), Some("summer"));
//! ```

pub mod routing;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

pub use routing::{
    ChromePolicy, Dispatch, Dispatcher, NavigationPath, Page, Params, RoutePattern, RouteTable,
    RoutingError, RoutingResult, NOT_FOUND_MESSAGE,
};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, ConfigReport, LogFormat, LoggingConfig, ServerConfig};
