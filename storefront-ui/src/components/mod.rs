//! UI Components
//!
//! Layout chrome shown around most pages.

pub mod navbar;
pub mod sidebar;

pub use navbar::Navbar;
pub use sidebar::Sidebar;
