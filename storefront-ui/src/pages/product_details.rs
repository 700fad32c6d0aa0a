//! Product Details Page

use leptos::*;
use leptos_router::*;

/// Single product view for `/ProductDetails/:id`
#[component]
pub fn ProductDetails(
    /// Product identifier captured from the path
    id: String,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{format!("Produs #{}", id)}</h1>
            <A href="/" class="text-rose-600 hover:underline">"Înapoi la produse"</A>
        </div>
    }
}
