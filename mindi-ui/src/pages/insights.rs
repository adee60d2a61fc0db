//! Insights Page

use leptos::*;

use mindi::Msg;

use crate::components::{BusyButton, HtmlFragment};
use crate::state::DashboardState;

#[component]
pub fn Insights() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let generating = state.select(|ui| ui.busy.generating_insight);

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Your Insights"</h2>
                <BusyButton
                    id="generate-insights"
                    label="Generate Insight"
                    busy=generating
                    on_click=move || state.dispatch(Msg::GenerateInsight)
                />
            </div>
            <HtmlFragment
                id="insights-container"
                class="insights-list"
                html=state.fragment(|view| view.insights_html.as_str())
            />
            <button class="btn btn-secondary load-more" on:click=move |_| state.dispatch(Msg::LoadMoreInsights)>
                "Load more"
            </button>
        </div>
    }
}
