//! Storefront routing
//!
//! The route dispatcher behind the storefront shell:
//!
//! - **path**: normalised navigation paths
//! - **pattern**: route pattern parsing (nom) and matching
//! - **table**: ordered first-match-wins route table with a catch-all
//! - **chrome**: navbar/sidebar visibility denylist
//! - **dispatcher**: combines the two into a single total decision
//! - **error**: construction-time errors
//!
//! # Example
//!
//! ```rust
//! use storefront::routing::{Dispatcher, Page};
//!
//! let dispatcher = Dispatcher::storefront();
//!
//! let dispatch = dispatcher.dispatch("/ProductDetails/42");
//! assert_eq!(dispatch.page, Page::ProductDetails);
//! assert_eq!(dispatch.param("id"), Some("42"));
//! assert!(dispatch.chrome_visible);
//!
//! assert!(!dispatcher.dispatch("/login").chrome_visible);
//! assert_eq!(dispatcher.dispatch("/nope").page, Page::NotFound);
//! ```

pub mod chrome;
pub mod dispatcher;
pub mod error;
pub mod page;
pub mod params;
pub mod path;
pub mod pattern;
pub mod table;

pub use chrome::{ChromePolicy, STOREFRONT_HIDDEN_PATHS};
pub use dispatcher::{Dispatch, Dispatcher};
pub use error::{RoutingError, RoutingResult};
pub use page::{Page, NOT_FOUND_MESSAGE};
pub use params::Params;
pub use path::NavigationPath;
pub use pattern::{RoutePattern, Segment};
pub use table::{RouteEntry, RouteSummary, RouteTable, RouteTableBuilder};
