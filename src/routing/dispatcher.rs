//! Route Dispatcher
//!
//! Combines the chrome policy and the route table: given a navigation path
//! it produces the chrome flag and exactly one page with its parameters.

use serde::Serialize;

use crate::routing::chrome::ChromePolicy;
use crate::routing::page::Page;
use crate::routing::params::Params;
use crate::routing::path::NavigationPath;
use crate::routing::table::RouteTable;

/// Outcome of dispatching one navigation path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// Normalised path that was dispatched
    pub path: NavigationPath,
    /// Whether the navbar and sidebar render
    pub chrome_visible: bool,
    /// Selected page
    pub page: Page,
    /// Values captured by the matching pattern
    pub params: Params,
}

impl Dispatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// Maps navigation paths to pages and layout decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    table: RouteTable<Page>,
    chrome: ChromePolicy,
}

impl Dispatcher {
    pub fn new(table: RouteTable<Page>, chrome: ChromePolicy) -> Self {
        Self { table, chrome }
    }

    /// Dispatcher wired with the storefront table and denylist
    pub fn storefront() -> Self {
        Self::new(RouteTable::storefront(), ChromePolicy::storefront())
    }

    pub fn table(&self) -> &RouteTable<Page> {
        &self.table
    }

    pub fn chrome(&self) -> &ChromePolicy {
        &self.chrome
    }

    /// Dispatch a path. Never fails: unmatched paths land on the catch-all.
    pub fn dispatch(&self, raw: &str) -> Dispatch {
        let path = NavigationPath::new(raw);
        let chrome_visible = self.chrome.is_visible(path.as_str());
        let (page, params) = self.table.resolve(&path);
        let page = *page;

        if page.is_not_found() {
            tracing::debug!(path = %path, "No route matched, using catch-all");
        } else {
            tracing::trace!(path = %path, page = %page, chrome_visible, "Route matched");
        }

        Dispatch {
            path,
            chrome_visible,
            page,
            params,
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_hidden_on_auth_pages() {
        let dispatcher = Dispatcher::storefront();

        let login = dispatcher.dispatch("/login");
        assert!(!login.chrome_visible);
        assert_eq!(login.page, Page::Login);

        let register = dispatcher.dispatch("/register");
        assert!(!register.chrome_visible);
        assert_eq!(register.page, Page::Register);
    }

    #[test]
    fn test_root_is_home() {
        let dispatch = Dispatcher::storefront().dispatch("/");
        assert_eq!(dispatch.page, Page::Home);
        assert!(dispatch.chrome_visible);
        assert!(dispatch.params.is_empty());
    }

    #[test]
    fn test_product_details_captures_id() {
        let dispatch = Dispatcher::storefront().dispatch("/ProductDetails/42");
        assert_eq!(dispatch.page, Page::ProductDetails);
        assert_eq!(dispatch.param("id"), Some("42"));
        assert!(dispatch.chrome_visible);
    }

    #[test]
    fn test_dresses_reuses_home_with_filter() {
        let dispatch = Dispatcher::storefront().dispatch("/dresses/summer");
        assert_eq!(dispatch.page, Page::Home);
        assert_eq!(dispatch.param("filter"), Some("summer"));
    }

    #[test]
    fn test_unknown_is_not_found_with_chrome() {
        let dispatch = Dispatcher::storefront().dispatch("/unknown/anything");
        assert_eq!(dispatch.page, Page::NotFound);
        assert!(dispatch.chrome_visible);
    }

    #[test]
    fn test_login_trailing_slash_keeps_chrome() {
        let dispatch = Dispatcher::storefront().dispatch("/login/");
        assert_eq!(dispatch.page, Page::Login);
        assert!(dispatch.chrome_visible);
    }

    #[test]
    fn test_query_string_ignored() {
        let dispatch = Dispatcher::storefront().dispatch("/login?next=/ProductDetails/7");
        assert_eq!(dispatch.page, Page::Login);
        assert!(!dispatch.chrome_visible);
        assert_eq!(dispatch.path.as_str(), "/login");
    }

    #[test]
    fn test_serializes_for_api() {
        let dispatch = Dispatcher::storefront().dispatch("/ProductDetails/42");
        let json = serde_json::to_value(&dispatch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": "/ProductDetails/42",
                "chrome_visible": true,
                "page": "product-details",
                "params": { "id": "42" }
            })
        );
    }
}
