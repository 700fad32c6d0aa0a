//! Storefront Shell
//!
//! Client-side routing shell of the storefront, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. The router
//! provides the current location; the shared `storefront` dispatcher turns
//! it into a page and a chrome (navbar + sidebar) decision.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
