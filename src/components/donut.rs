//! Donut Chart Component
//!
//! Renders the expense list as an animated donut and wires slice
//! interactions: hover feedback, tooltip, click-to-delete.

use leptos::*;

use crate::api;
use crate::chart::{Animator, SliceFrame, CENTER_X, CENTER_Y, HEIGHT, MARGIN, WIDTH};
use crate::components::legend::Legend;
use crate::components::tooltip::{Tooltip, TooltipPayload};
use crate::state::global::GlobalState;

/// Donut chart over the live expense list.
#[component]
pub fn Donut() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let animator = Animator::new();
    let tooltip = create_rw_signal(None::<TooltipPayload>);
    let slices = animator.slices();

    // One retarget per applied change batch.
    let anim = animator.clone();
    create_effect(move |_| {
        let expenses = state.expenses.get();
        anim.retarget(&expenses);
    });

    let svg_width = WIDTH + MARGIN;
    let svg_height = HEIGHT + MARGIN;

    view! {
        <div class="canvas">
            <svg width=svg_width height=svg_height>
                <g transform=format!("translate({}, {})", CENTER_X, CENTER_Y)>
                    <For
                        each=move || slices.get()
                        key=|slice| slice.id.clone()
                        children=move |slice| {
                            view! {
                                <Slice
                                    animator=animator.clone()
                                    tooltip=tooltip
                                    slices=slices
                                    slice=slice
                                />
                            }
                        }
                    />
                </g>
                <g transform=format!("translate({}, 10)", WIDTH + 40.0)>
                    <Legend />
                </g>
            </svg>
            <Tooltip payload=tooltip />
        </div>
    }
}

/// One slice path. The `<For>` key keeps the element alive across updates,
/// so the listeners below attach exactly once per slice.
#[component]
fn Slice(
    animator: Animator,
    tooltip: RwSignal<Option<TooltipPayload>>,
    slices: RwSignal<Vec<SliceFrame>>,
    slice: SliceFrame,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = slice.id.clone();

    // Live frame lookup by record id; falls back to the creation frame in
    // the tick between exit completion and element removal.
    let current = {
        let initial = slice;
        create_memo(move |_| {
            slices
                .with(|all| all.iter().find(|s| s.id == initial.id).cloned())
                .unwrap_or_else(|| initial.clone())
        })
    };

    let enter_id = id.clone();
    let anim_enter = animator.clone();
    let on_enter = move |_: web_sys::MouseEvent| {
        anim_enter.hover(&enter_id, true);
        let frame = current.get();
        tooltip.set(Some(TooltipPayload {
            name: frame.name.clone(),
            cost: frame.cost,
            top_px: CENTER_Y + frame.anchor.1,
            left_px: CENTER_X + frame.anchor.0,
        }));
    };

    let leave_id = id.clone();
    let on_leave = move |_: web_sys::MouseEvent| {
        animator.hover(&leave_id, false);
        tooltip.set(None);
    };

    let on_click = move |_: web_sys::MouseEvent| {
        let id = id.clone();
        let state = state.clone();
        spawn_local(async move {
            // No optimistic removal: the store's removed change drives the
            // exit animation.
            if let Err(e) = api::delete_expense(&id).await {
                web_sys::console::error_1(&format!("Failed to delete expense: {}", e).into());
                state.show_error(&e);
            }
        });
    };

    view! {
        <path
            class="arc"
            d=move || current.get().path
            fill=move || current.get().color
            stroke="white"
            stroke-width="2"
            style=move || format!("opacity: {}; cursor: pointer;", current.get().opacity)
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=on_click
        />
    }
}
