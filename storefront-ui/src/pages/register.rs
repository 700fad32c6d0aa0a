//! Registration Page
//!
//! Rendered without chrome.

use leptos::*;
use leptos_router::*;

/// Registration form
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <div class="max-w-sm mx-auto mt-16 bg-white rounded-lg shadow p-8 space-y-4">
            <h1 class="text-2xl font-bold">"Înregistrare"</h1>
            <form class="space-y-3" on:submit=|ev| ev.prevent_default()>
                <input class="w-full border rounded px-3 py-2" type="text" placeholder="Nume" />
                <input class="w-full border rounded px-3 py-2" type="email" placeholder="Email" />
                <input class="w-full border rounded px-3 py-2" type="password" placeholder="Parolă" />
                <button class="w-full bg-rose-600 text-white rounded px-3 py-2" type="submit">
                    "Creează cont"
                </button>
            </form>
            <p class="text-sm text-gray-500">
                "Ai deja cont? " <A href="/login" class="text-rose-600">"Autentifică-te"</A>
            </p>
        </div>
    }
}
