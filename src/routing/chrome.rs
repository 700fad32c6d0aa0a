//! Chrome visibility
//!
//! Decides whether the navigation bar and sidebar render for a path.
//! Membership in the denylist is an exact string comparison against the
//! location pathname: `/login/` keeps the chrome, `/login` hides it.

use serde::Serialize;

/// Paths on which the navbar and sidebar are hidden
pub const STOREFRONT_HIDDEN_PATHS: [&str; 2] = ["/login", "/register"];

/// Denylist-based chrome policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromePolicy {
    hidden_on: Vec<String>,
}

impl ChromePolicy {
    /// Policy hiding chrome on the given paths
    pub fn hidden_on<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hidden_on: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The storefront denylist: login and registration pages
    pub fn storefront() -> Self {
        Self::hidden_on(STOREFRONT_HIDDEN_PATHS)
    }

    pub fn is_visible(&self, path: &str) -> bool {
        !self.hidden_on.iter().any(|hidden| hidden == path)
    }

    pub fn hidden_paths(&self) -> &[String] {
        &self.hidden_on
    }
}

impl Default for ChromePolicy {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_on_auth_pages() {
        let policy = ChromePolicy::storefront();
        assert!(!policy.is_visible("/login"));
        assert!(!policy.is_visible("/register"));
    }

    #[test]
    fn test_visible_elsewhere() {
        let policy = ChromePolicy::storefront();
        for path in ["/", "/ProductDetails/42", "/dresses/summer", "/unknown/anything"] {
            assert!(policy.is_visible(path), "{}", path);
        }
    }

    #[test]
    fn test_exact_match_only() {
        let policy = ChromePolicy::storefront();
        assert!(policy.is_visible("/login/"));
        assert!(policy.is_visible("/LOGIN"));
        assert!(policy.is_visible("/register/step-2"));
    }
}
