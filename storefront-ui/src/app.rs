//! App Root Component
//!
//! Mounts the router, shows chrome where the dispatcher allows it and
//! renders the dispatched page.

use leptos::*;
use leptos_router::*;
use storefront::routing::{Dispatch, Page, NOT_FOUND_MESSAGE};

use crate::components::{Navbar, Sidebar};
use crate::pages::{Home, Login, ProductDetails, Register};
use crate::state::provide_shell_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppContent />
        </Router>
    }
}

/// Everything below the router; needs the router's location
#[component]
fn AppContent() -> impl IntoView {
    let shell = provide_shell_state();

    create_effect(move |_| {
        let title = shell.dispatch.with(|d| d.page.title());
        document().set_title(&format!("{} | Storefront", title));
    });

    view! {
        <div class="App min-h-screen bg-gray-50 text-gray-900">
            <Show when=move || shell.chrome_visible()>
                <Navbar />
                <Sidebar />
            </Show>

            <main class="container mx-auto px-4 py-8">
                {move || render_page(shell.dispatch.get())}
            </main>
        </div>
    }
}

fn render_page(dispatch: Dispatch) -> View {
    match dispatch.page {
        Page::Home => {
            let filter = dispatch.param("filter").map(str::to_string);
            view! { <Home filter=filter /> }.into_view()
        }
        Page::Register => view! { <Register /> }.into_view(),
        Page::Login => view! { <Login /> }.into_view(),
        Page::ProductDetails => {
            let id = dispatch.param("id").unwrap_or_default().to_string();
            view! { <ProductDetails id=id /> }.into_view()
        }
        Page::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// Catch-all page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-6">{NOT_FOUND_MESSAGE}</h1>
            <A
                href="/"
                class="px-6 py-3 bg-rose-600 hover:bg-rose-700 text-white rounded-lg font-medium transition-colors"
            >
                "Înapoi la magazin"
            </A>
        </div>
    }
}
