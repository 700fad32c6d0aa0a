//! Page identifiers
//!
//! The set of views the shell can mount. The page components themselves
//! live in the frontend crate; the router only names them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown by the catch-all route
pub const NOT_FOUND_MESSAGE: &str = "Pagina nu a fost găsită";

/// A page the dispatcher can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Product listing, optionally filtered by category
    Home,
    /// Account registration form
    Register,
    /// Login form
    Login,
    /// Single product view
    ProductDetails,
    /// Catch-all placeholder
    NotFound,
}

impl Page {
    /// All pages, in route table order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Register,
        Page::Login,
        Page::ProductDetails,
        Page::NotFound,
    ];

    /// Stable machine name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Register => "register",
            Page::Login => "login",
            Page::ProductDetails => "product-details",
            Page::NotFound => "not-found",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Register => "Register",
            Page::Login => "Login",
            Page::ProductDetails => "Product Details",
            Page::NotFound => NOT_FOUND_MESSAGE,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
