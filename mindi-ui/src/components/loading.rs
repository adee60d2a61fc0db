//! Loading Components
//!
//! Submit buttons that swap their label for a spinner while busy.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="btn-loader loading-spinner" />
    }
}

/// Button disabled and showing a spinner while `busy` is set
#[component]
pub fn BusyButton<F>(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    busy: Signal<bool>,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            id=id
            class="btn btn-primary"
            disabled=move || busy.get()
            on:click=move |_| on_click()
        >
            {move || {
                if busy.get() {
                    view! { <InlineLoading /> }.into_view()
                } else {
                    view! { <span class="btn-text">{label}</span> }.into_view()
                }
            }}
        </button>
    }
}
