//! Toast Notification Component
//!
//! Shows the notices the controller emits, newest last.

use leptos::*;

use mindi::{Notice, NoticeLevel};

use crate::state::DashboardState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="toast-container">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <ToastMessage notice=toast.notice /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let (icon, variant) = match notice.level {
        NoticeLevel::Success => ("✓", "success"),
        NoticeLevel::Error => ("✕", "error"),
        NoticeLevel::Warning => ("⚠", "warning"),
        NoticeLevel::Info => ("ℹ", "info"),
    };

    view! {
        <div class=format!("notification notification-{}", variant)>
            <span class="notification-icon">{icon}</span>
            <span class="notification-message">{notice.message}</span>
        </div>
    }
}
