//! Login Page
//!
//! Rendered without chrome.

use leptos::*;
use leptos_router::*;

/// Login form
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="max-w-sm mx-auto mt-16 bg-white rounded-lg shadow p-8 space-y-4">
            <h1 class="text-2xl font-bold">"Autentificare"</h1>
            <form class="space-y-3" on:submit=|ev| ev.prevent_default()>
                <input class="w-full border rounded px-3 py-2" type="email" placeholder="Email" />
                <input class="w-full border rounded px-3 py-2" type="password" placeholder="Parolă" />
                <button class="w-full bg-rose-600 text-white rounded px-3 py-2" type="submit">
                    "Intră în cont"
                </button>
            </form>
            <p class="text-sm text-gray-500">
                "Nu ai cont? " <A href="/register" class="text-rose-600">"Înregistrează-te"</A>
            </p>
        </div>
    }
}
