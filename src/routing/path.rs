//! Navigation Path
//!
//! The current URL path as read from the browser location (or an incoming
//! request). Query strings and fragments are dropped; they never take part
//! in route selection.

use serde::Serialize;
use std::fmt;

/// A normalised navigation path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavigationPath(String);

impl NavigationPath {
    /// Build a navigation path from raw location text
    ///
    /// Anything from the first `?` or `#` onwards is removed and a leading
    /// `/` is added when missing. Trailing slashes are kept so that exact
    /// string checks (such as the chrome denylist) see what the user typed.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let path = &raw[..end];

        if path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{}", path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments between slashes, ignoring trailing slashes
    ///
    /// `"/"` yields no segments. Interior empty segments (from `//`) are
    /// preserved as empty strings so that patterns can reject them.
    pub fn segments(&self) -> Vec<&str> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return Vec::new();
        }
        trimmed[1..].split('/').collect()
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for NavigationPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NavigationPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for NavigationPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(NavigationPath::new("/dresses/summer?page=2").as_str(), "/dresses/summer");
        assert_eq!(NavigationPath::new("/login#top").as_str(), "/login");
        assert_eq!(NavigationPath::new("/?q=1#x").as_str(), "/");
    }

    #[test]
    fn test_adds_leading_slash() {
        assert_eq!(NavigationPath::new("login").as_str(), "/login");
        assert_eq!(NavigationPath::new("").as_str(), "/");
    }

    #[test]
    fn test_keeps_trailing_slash() {
        assert_eq!(NavigationPath::new("/login/").as_str(), "/login/");
    }

    #[test]
    fn test_segments() {
        assert!(NavigationPath::new("/").segments().is_empty());
        assert!(NavigationPath::new("///").segments().is_empty());
        assert_eq!(NavigationPath::new("/ProductDetails/42").segments(), vec!["ProductDetails", "42"]);
        assert_eq!(NavigationPath::new("/a/b/").segments(), vec!["a", "b"]);
        assert_eq!(NavigationPath::new("/a//b").segments(), vec!["a", "", "b"]);
    }
}
