//! Shell State
//!
//! The current dispatch, recomputed whenever the location changes and
//! shared with the layout components through context.

use leptos::*;
use leptos_router::use_location;
use storefront::routing::{Dispatch, Dispatcher};

/// Dispatch result for the current location
#[derive(Clone, Copy)]
pub struct ShellState {
    pub dispatch: Memo<Dispatch>,
}

impl ShellState {
    /// Whether the navbar and sidebar render
    pub fn chrome_visible(&self) -> bool {
        self.dispatch.with(|d| d.chrome_visible)
    }

    /// Category filter captured from `/dresses/:filter`, if any
    pub fn active_filter(&self) -> Option<String> {
        self.dispatch
            .with(|d| d.param("filter").map(str::to_string))
    }
}

/// Create the shell state and provide it to descendants
///
/// Must be called inside a `<Router>`.
pub fn provide_shell_state() -> ShellState {
    let dispatcher = store_value(Dispatcher::storefront());
    let location = use_location();

    let dispatch = create_memo(move |_| {
        let path = location.pathname.get();
        dispatcher.with_value(|d| d.dispatch(&path))
    });

    let state = ShellState { dispatch };
    provide_context(state);
    state
}

/// Read the shell state provided by the app root
pub fn use_shell_state() -> Option<ShellState> {
    use_context::<ShellState>()
}
