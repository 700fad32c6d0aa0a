//! Pages
//!
//! Page views the dispatcher selects. These are thin placeholders: they
//! show what the router hands them and link back into the shell.

pub mod home;
pub mod login;
pub mod product_details;
pub mod register;

pub use home::Home;
pub use login::Login;
pub use product_details::ProductDetails;
pub use register::Register;
