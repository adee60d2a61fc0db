//! Sidebar Component
//!
//! Brand, tab navigation and logout.

use leptos::*;

use mindi::{Msg, Tab};

use crate::state::DashboardState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let collapsed = move || state.with_ui(|ui| ui.sidebar_collapsed);
    let mobile_open = move || state.with_ui(|ui| ui.sidebar_mobile_open);

    view! {
        <aside id="sidebar" class="sidebar" class:collapsed=collapsed class:mobile-open=mobile_open>
            <div class="sidebar-header">
                <span class="logo">"🧠"</span>
                <span class="brand">"Mindi"</span>
                <button id="sidebar-toggle" class="sidebar-toggle" on:click=move |_| state.toggle_sidebar()>
                    "☰"
                </button>
            </div>

            <nav class="sidebar-nav">
                {Tab::ALL.into_iter().map(|tab| view! { <NavItem tab=tab /> }).collect_view()}
            </nav>

            <button id="logout-btn" class="logout-btn" on:click=move |_| state.dispatch(Msg::Logout)>
                <span class="nav-icon">"🚪"</span>
                <span class="nav-label">"Logout"</span>
            </button>
        </aside>
    }
}

/// Individual navigation entry
#[component]
fn NavItem(tab: Tab) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let active = move || state.with_ui(|ui| ui.active_tab == tab);

    view! {
        <a
            href="#"
            class="nav-item"
            class:active=active
            data-tab=tab.id()
            on:click=move |ev| {
                ev.prevent_default();
                state.dispatch(Msg::SwitchTab(tab));
            }
        >
            <span class="nav-icon">{tab.icon()}</span>
            <span class="nav-label">{tab.title()}</span>
        </a>
    }
}
