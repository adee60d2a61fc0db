//! Pages
//!
//! One panel per navigation tab. All panels stay mounted so the chart
//! canvases exist whenever the controller asks for a redraw.

pub mod analytics;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod overview;

pub use analytics::Analytics;
pub use insights::Insights;
pub use journal::Journal;
pub use mood::MoodTracker;
pub use overview::Overview;

use leptos::*;

use mindi::Tab;

use crate::state::DashboardState;

/// Tab panel wrapper, visible only while its tab is active
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let active = move || state.with_ui(|ui| ui.active_tab == tab);

    view! {
        <section id=format!("tab-{}", tab.id()) class="tab-content" class:active=active>
            <header class="page-header">
                <h1>{tab.icon()} " " {tab.title()}</h1>
            </header>
            {children()}
        </section>
    }
}
