//! Journal Page
//!
//! Entry editor, AI response panel and the recent entries list.

use leptos::*;

use mindi::{Msg, Panel};

use crate::components::{BusyButton, HtmlFragment};
use crate::pages::mood::AiPanel;
use crate::state::DashboardState;

#[component]
pub fn Journal() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let saving = state.select(|ui| ui.busy.saving_journal);

    view! {
        <div class="card">
            <h2>"Write it down"</h2>
            <textarea
                id="journal-content"
                rows="8"
                placeholder="What's on your mind today?"
                prop:value=move || state.with_ui(|ui| ui.journal_draft.clone())
                on:input=move |ev| state.dispatch(Msg::SetJournalDraft(event_target_value(&ev)))
            />
            <div class="journal-footer">
                <span id="char-count">{move || state.with_ui(|ui| ui.journal_char_count())}</span>
                " characters"
                <BusyButton
                    id="save-journal"
                    label="Save Entry"
                    busy=saving
                    on_click=move || state.dispatch(Msg::SaveJournal)
                />
            </div>
        </div>

        <AiPanel panel=Panel::AiResponse id="ai-response" title="🤖 Mindi says" />

        <div class="card">
            <h2>"Recent Entries"</h2>
            <HtmlFragment
                id="entries-list"
                class="entries-list"
                html=state.fragment(|view| view.journal_html.as_str())
            />
            <button class="btn btn-secondary load-more" on:click=move |_| state.dispatch(Msg::LoadMoreJournal)>
                "Load more"
            </button>
        </div>
    }
}
