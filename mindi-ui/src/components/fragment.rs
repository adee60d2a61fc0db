//! Rendered Fragment
//!
//! Container whose content is an HTML string produced by `mindi::render`.
//! The renderers escape every user-supplied value before it gets here.

use leptos::*;

#[component]
pub fn HtmlFragment(
    id: &'static str,
    #[prop(default = "")]
    class: &'static str,
    #[prop(into)]
    html: Signal<String>,
) -> impl IntoView {
    view! {
        <div id=id class=class inner_html=move || html.get() />
    }
}
