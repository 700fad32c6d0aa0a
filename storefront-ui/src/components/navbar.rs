//! Navigation Component
//!
//! Header bar with the shop name and account links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold text-rose-600">
                        "Storefront"
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Produse" />
                        <NavLink href="/login" label="Autentificare" />
                        <NavLink href="/register" label="Înregistrare" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
