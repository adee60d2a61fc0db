//! Analytics Page
//!
//! Mood history chart and per-mood statistics, both fetched when the tab
//! opens.

use leptos::*;

use mindi::render::ChartSlot;

use crate::components::{ChartCanvas, HtmlFragment};
use crate::state::DashboardState;

#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="card">
            <h2>"Mood History"</h2>
            <ChartCanvas slot=ChartSlot::History />
        </div>

        <div class="card">
            <h2>"This Week"</h2>
            <HtmlFragment
                id="mood-stats"
                class="mood-stats"
                html=state.fragment(|view| view.stats_html.as_str())
            />
        </div>
    }
}
