//! Slice Tooltip
//!
//! Hover card anchored at a slice, showing the record and the delete hint.

use leptos::*;

/// Content and position of the tooltip, relative to the canvas wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPayload {
    pub name: String,
    pub cost: f64,
    pub top_px: f64,
    pub left_px: f64,
}

/// Tooltip overlay; rendered inside the `.canvas` wrapper.
#[component]
pub fn Tooltip(payload: RwSignal<Option<TooltipPayload>>) -> impl IntoView {
    view! {
        {move || {
            payload.get().map(|p| {
                let style = format!("top: {:.0}px; left: {:.0}px;", p.top_px, p.left_px);
                view! {
                    <div class="tip card" style=style>
                        <div class="name">{p.name}</div>
                        <div class="cost">{p.cost}</div>
                        <div class="delete">"Click to delete item"</div>
                    </div>
                }
            })
        }}
    }
}
