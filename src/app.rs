//! App Root Component
//!
//! Root layout with global state, subscription startup, and status footer.

use leptos::*;

use crate::api;
use crate::components::{Donut, ExpenseEntry, Toast};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::websocket::init_subscription;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Start the live subscription to the expense collection
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    init_subscription(state, &api::get_api_base());

    view! {
        <div class="app">
            <header>
                <h1>"Spendwheel"</h1>
                <p>"Where the money goes, live"</p>
            </header>

            <main>
                <Donut />
                <ExpenseEntry />
            </main>

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer showing subscription status and last update time
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let connected = state.ws_connected;
    let last_sync = state.last_sync;

    view! {
        <footer>
            {move || {
                if connected.get() {
                    view! {
                        <span class="status connected">
                            <span class="dot" />
                            "Live"
                        </span>
                    }
                    .into_view()
                } else {
                    view! {
                        <span class="status disconnected">
                            <span class="dot" />
                            "Disconnected"
                        </span>
                    }
                    .into_view()
                }
            }}

            <span class="sync">
                {move || {
                    last_sync.get()
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "No updates yet".to_string())
                }}
            </span>
        </footer>
    }
}
