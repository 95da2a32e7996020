//! Expense Entry Component
//!
//! Form for adding a new expense to the collection.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Expense entry form
#[component]
pub fn ExpenseEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (cost, set_cost) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let item = name.get().trim().to_string();
        if item.is_empty() {
            state.show_error("Please enter an expense name");
            return;
        }
        let amount: f64 = match cost.get().trim().parse() {
            Ok(v) if v > 0.0 => v,
            _ => {
                state.show_error("Please enter a cost greater than zero");
                return;
            }
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            // The chart itself only updates once the subscription echoes
            // the added change.
            match api::add_expense(&item, amount).await {
                Ok(expense) => {
                    state_clone.show_success(&format!("Added {}", expense.name));
                    set_name.set(String::new());
                    set_cost.set(String::new());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="expense-entry">
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                step="1"
                placeholder="Cost"
                prop:value=move || cost.get()
                on:input=move |ev| set_cost.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Add expense" }}
            </button>
        </form>
    }
}
