//! Sidebar Component
//!
//! Dress categories; each links to the filtered listing.

use leptos::*;
use leptos_router::*;

use crate::state::use_shell_state;

/// Category filters as (slug, label)
pub const DRESS_CATEGORIES: [(&str, &str); 4] = [
    ("summer", "Rochii de vară"),
    ("evening", "Rochii de seară"),
    ("casual", "Rochii casual"),
    ("office", "Rochii office"),
];

/// Listing path for a category filter
pub fn category_href(slug: &str) -> String {
    format!("/dresses/{}", slug)
}

/// Category sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell_state();
    let active = move || shell.and_then(|s| s.active_filter());

    view! {
        <aside class="w-56 shrink-0 bg-white border-r border-gray-200 p-4">
            <h2 class="text-sm font-semibold uppercase text-gray-500 mb-3">"Categorii"</h2>
            <ul class="space-y-1">
                {DRESS_CATEGORIES
                    .into_iter()
                    .map(|(slug, label)| {
                        let is_active = move || active().as_deref() == Some(slug);
                        view! {
                            <li class=("font-semibold", is_active)>
                                <A
                                    href=category_href(slug)
                                    class="block px-3 py-2 rounded-lg hover:bg-gray-100"
                                >
                                    {label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
