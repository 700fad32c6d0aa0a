//! Route Table
//!
//! Ordered (pattern, page) pairs evaluated first-match-wins. A table always
//! ends with a catch-all entry, so resolution is total.

use serde::Serialize;

use crate::routing::error::{RoutingError, RoutingResult};
use crate::routing::page::Page;
use crate::routing::params::Params;
use crate::routing::path::NavigationPath;
use crate::routing::pattern::{RoutePattern, Segment};

/// A single table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<P = Page> {
    pub pattern: RoutePattern,
    pub page: P,
}

/// Serializable view of an entry, used when listing the table
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub pattern: String,
    pub page: String,
    pub params: Vec<String>,
}

/// Ordered route table ending in a catch-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P = Page> {
    entries: Vec<RouteEntry<P>>,
}

impl<P> RouteTable<P> {
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder::default()
    }

    /// Entries in evaluation order; the last one is the catch-all
    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a path to exactly one page and its captured parameters
    pub fn resolve(&self, path: &NavigationPath) -> (&P, Params) {
        for entry in &self.entries[..self.entries.len() - 1] {
            if let Some(params) = entry.pattern.matches(path) {
                return (&entry.page, params);
            }
        }
        (self.fallback(), Params::new())
    }

    fn fallback(&self) -> &P {
        // build() refuses tables without a trailing catch-all
        &self.entries[self.entries.len() - 1].page
    }
}

impl<P: std::fmt::Display> RouteTable<P> {
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries
            .iter()
            .map(|entry| RouteSummary {
                pattern: entry.pattern.to_string(),
                page: entry.page.to_string(),
                params: entry
                    .pattern
                    .param_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }
}

impl RouteTable<Page> {
    /// The storefront's fixed table
    ///
    /// | Pattern               | Page           |
    /// |-----------------------|----------------|
    /// | `/`                   | Home           |
    /// | `/register`           | Register       |
    /// | `/login`              | Login          |
    /// | `/ProductDetails/:id` | ProductDetails |
    /// | `/dresses/:filter`    | Home           |
    /// | `*`                   | NotFound       |
    pub fn storefront() -> Self {
        let literal = |s: &str| Segment::Literal(s.to_string());
        let param = |s: &str| Segment::Param(s.to_string());

        let entry = |segments: Vec<Segment>, page: Page| RouteEntry {
            pattern: RoutePattern::from_segments(segments),
            page,
        };

        Self {
            entries: vec![
                entry(vec![], Page::Home),
                entry(vec![literal("register")], Page::Register),
                entry(vec![literal("login")], Page::Login),
                entry(
                    vec![literal("ProductDetails"), param("id")],
                    Page::ProductDetails,
                ),
                entry(vec![literal("dresses"), param("filter")], Page::Home),
                RouteEntry {
                    pattern: RoutePattern::catch_all(),
                    page: Page::NotFound,
                },
            ],
        }
    }
}

impl Default for RouteTable<Page> {
    fn default() -> Self {
        Self::storefront()
    }
}

/// Builder enforcing that the catch-all is registered last
#[derive(Debug)]
pub struct RouteTableBuilder<P> {
    entries: Vec<RouteEntry<P>>,
    closed: bool,
}

impl<P> Default for RouteTableBuilder<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            closed: false,
        }
    }
}

impl<P> RouteTableBuilder<P> {
    /// Append a route; `*` registers the catch-all
    pub fn route(mut self, pattern: &str, page: P) -> RoutingResult<Self> {
        if self.closed {
            return Err(RoutingError::RouteAfterCatchAll(pattern.to_string()));
        }

        let pattern = RoutePattern::parse(pattern)?;
        self.closed = pattern.is_catch_all();
        self.entries.push(RouteEntry { pattern, page });
        Ok(self)
    }

    /// Register the catch-all entry; no route may follow it
    pub fn catch_all(mut self, page: P) -> RoutingResult<Self> {
        if self.closed {
            return Err(RoutingError::RouteAfterCatchAll(
                RoutePattern::catch_all().to_string(),
            ));
        }

        self.entries.push(RouteEntry {
            pattern: RoutePattern::catch_all(),
            page,
        });
        self.closed = true;
        Ok(self)
    }

    pub fn build(self) -> RoutingResult<RouteTable<P>> {
        if !self.closed {
            return Err(RoutingError::MissingCatchAll);
        }
        Ok(RouteTable {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(table: &RouteTable, raw: &str) -> (Page, Params) {
        let (page, params) = table.resolve(&NavigationPath::new(raw));
        (*page, params)
    }

    #[test]
    fn test_storefront_table_shape() {
        let table = RouteTable::storefront();
        let patterns: Vec<String> = table.entries().iter().map(|e| e.pattern.to_string()).collect();
        assert_eq!(
            patterns,
            vec!["/", "/register", "/login", "/ProductDetails/:id", "/dresses/:filter", "*"]
        );
        assert!(table.entries().last().unwrap().pattern.is_catch_all());
    }

    #[test]
    fn test_storefront_matches_parsed_equivalent() {
        let parsed = RouteTable::builder()
            .route("/", Page::Home)
            .and_then(|b| b.route("/register", Page::Register))
            .and_then(|b| b.route("/login", Page::Login))
            .and_then(|b| b.route("/ProductDetails/:id", Page::ProductDetails))
            .and_then(|b| b.route("/dresses/:filter", Page::Home))
            .and_then(|b| b.route("*", Page::NotFound))
            .and_then(|b| b.build())
            .unwrap();
        assert_eq!(parsed, RouteTable::storefront());
    }

    #[test]
    fn test_resolve_storefront_routes() {
        let table = RouteTable::storefront();

        assert_eq!(resolve(&table, "/").0, Page::Home);
        assert_eq!(resolve(&table, "/register").0, Page::Register);
        assert_eq!(resolve(&table, "/login").0, Page::Login);

        let (page, params) = resolve(&table, "/ProductDetails/42");
        assert_eq!(page, Page::ProductDetails);
        assert_eq!(params.get("id"), Some("42"));

        let (page, params) = resolve(&table, "/dresses/summer");
        assert_eq!(page, Page::Home);
        assert_eq!(params.get("filter"), Some("summer"));

        let (page, params) = resolve(&table, "/unknown/anything");
        assert_eq!(page, Page::NotFound);
        assert!(params.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::builder()
            .route("/sale/:item", "generic")
            .and_then(|b| b.route("/sale/today", "specific"))
            .and_then(|b| b.catch_all("missing"))
            .and_then(|b| b.build())
            .unwrap();

        let (page, params) = table.resolve(&NavigationPath::new("/sale/today"));
        assert_eq!(*page, "generic");
        assert_eq!(params.get("item"), Some("today"));
    }

    #[test]
    fn test_build_requires_catch_all() {
        let err = RouteTable::builder()
            .route("/", Page::Home)
            .and_then(|b| b.build())
            .unwrap_err();
        assert_eq!(err, RoutingError::MissingCatchAll);
    }

    #[test]
    fn test_route_after_catch_all_rejected() {
        let err = RouteTable::builder()
            .catch_all(Page::NotFound)
            .and_then(|b| b.route("/login", Page::Login))
            .unwrap_err();
        assert_eq!(err, RoutingError::RouteAfterCatchAll("/login".to_string()));
    }

    #[test]
    fn test_second_catch_all_rejected() {
        let err = RouteTable::builder()
            .route("*", "first")
            .and_then(|b| b.catch_all("second"))
            .unwrap_err();
        assert_eq!(err, RoutingError::RouteAfterCatchAll("*".to_string()));

        let err = RouteTable::builder()
            .catch_all("first")
            .and_then(|b| b.catch_all("second"))
            .unwrap_err();
        assert_eq!(err, RoutingError::RouteAfterCatchAll("*".to_string()));
    }

    #[test]
    fn test_summaries() {
        let summaries = RouteTable::storefront().summaries();
        assert_eq!(summaries.len(), 6);
        assert_eq!(summaries[3].pattern, "/ProductDetails/:id");
        assert_eq!(summaries[3].page, "product-details");
        assert_eq!(summaries[3].params, vec!["id".to_string()]);
        assert_eq!(summaries[5].page, "not-found");
    }
}
