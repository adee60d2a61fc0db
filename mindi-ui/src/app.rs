//! App Root Component
//!
//! Provides the dashboard state, lays out the sidebar and tab panels, and
//! sends the initial load once mounted.

use leptos::*;

use mindi::{Config, Msg, Tab};

use crate::components::{Sidebar, Toast};
use crate::pages::{Analytics, Insights, Journal, MoodTracker, Overview, TabPanel};
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    let state = provide_dashboard_state(config);

    // Initial fetch and periodic refresh, once the canvases exist
    request_animation_frame(move || state.dispatch(Msg::Init));

    let collapsed = move || state.with_ui(|ui| ui.sidebar_collapsed);

    view! {
        <div class="dashboard">
            <Sidebar />

            <main class="main-content" class:expanded=collapsed>
                <button class="mobile-toggle" on:click=move |_| state.toggle_sidebar()>"☰"</button>
                <TabPanel tab=Tab::Overview><Overview /></TabPanel>
                <TabPanel tab=Tab::Mood><MoodTracker /></TabPanel>
                <TabPanel tab=Tab::Journal><Journal /></TabPanel>
                <TabPanel tab=Tab::Insights><Insights /></TabPanel>
                <TabPanel tab=Tab::Analytics><Analytics /></TabPanel>
            </main>

            <Toast />
        </div>
    }
}
