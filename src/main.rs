//! Spendwheel
//!
//! Live expense donut widget built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) application that compiles to
//! WebAssembly. It mirrors a remote expense collection over a WebSocket
//! subscription and issues document writes over HTTP; all persistence lives
//! in the remote store.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
