//! Chart Legend
//!
//! One swatch per distinct expense name, colored by the same ordinal scale
//! as the slices.

use leptos::*;

use crate::chart::ColorScale;
use crate::state::global::GlobalState;

const SWATCH_RADIUS: f64 = 7.0;
const ROW_SPACING: f64 = 25.0;

/// Legend group; rendered inside the chart SVG.
#[component]
pub fn Legend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <g class="legend">
            {move || {
                let expenses = state.expenses.get();
                let colors = ColorScale::from_names(expenses.iter().map(|e| e.name.as_str()));
                colors
                    .entries()
                    .enumerate()
                    .map(|(row, (name, color))| {
                        let y = row as f64 * ROW_SPACING;
                        view! {
                            <g transform=format!("translate(0, {})", y)>
                                <circle r=SWATCH_RADIUS fill=color />
                                // Label color is fixed, independent of theme.
                                <text x="15" y="5" fill="black">{name.to_string()}</text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </g>
    }
}
