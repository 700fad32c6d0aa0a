//! Home Page
//!
//! Product listing, mounted for `/` and, with a category filter, for
//! `/dresses/:filter`.

use leptos::*;
use leptos_router::*;

/// Product listing
#[component]
pub fn Home(
    /// Category captured from `/dresses/:filter`
    filter: Option<String>,
) -> impl IntoView {
    let heading = match &filter {
        Some(filter) => format!("Rochii: {}", filter),
        None => "Toate produsele".to_string(),
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{heading}</h1>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {(1..=8)
                    .map(|id| {
                        view! {
                            <A
                                href=format!("/ProductDetails/{}", id)
                                class="block bg-white rounded-lg shadow p-4 hover:shadow-md"
                            >
                                {format!("Produs #{}", id)}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
