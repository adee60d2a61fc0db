//! Overview Page
//!
//! Counters, the two latest insights and the mood chart.

use leptos::*;

use mindi::render::ChartSlot;

use crate::components::{ChartCanvas, HtmlFragment};
use crate::state::DashboardState;

#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let counts = state.select(|ui| ui.view.counts);

    view! {
        <div class="stats-grid">
            <StatCard id="overview-moods" label="Moods Logged" value=Signal::derive(move || counts.get().moods) />
            <StatCard id="overview-entries" label="Journal Entries" value=Signal::derive(move || counts.get().journal_entries) />
            <StatCard id="overview-insights" label="Insights" value=Signal::derive(move || counts.get().insights) />
        </div>

        <div class="overview-grid">
            <div class="card">
                <h2>"Mood Trend"</h2>
                <ChartCanvas slot=ChartSlot::Overview />
            </div>

            <div class="card">
                <h2>"Latest Insights"</h2>
                <HtmlFragment
                    id="overview-insights-list"
                    class="insights-preview"
                    html=state.fragment(|view| view.overview_insights_html.as_str())
                />
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value" id=id>{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
