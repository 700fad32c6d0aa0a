//! State Management
//!
//! Shell state derived from the router location.

pub mod shell;

pub use shell::{provide_shell_state, use_shell_state, ShellState};
