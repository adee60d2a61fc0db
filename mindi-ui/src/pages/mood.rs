//! Mood Tracker Page
//!
//! Mood picker, intensity slider, notes and the AI suggestion panel.

use leptos::*;

use mindi::sync::state::{MAX_INTENSITY, MIN_INTENSITY};
use mindi::{MoodType, Msg, Panel};

use crate::components::BusyButton;
use crate::state::DashboardState;

#[component]
pub fn MoodTracker() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let details_open = move || state.with_ui(|ui| ui.mood_details_open);
    let intensity = move || state.with_ui(|ui| ui.intensity);
    let saving = state.select(|ui| ui.busy.saving_mood);

    view! {
        <div class="card">
            <h2>"How are you feeling?"</h2>
            <div class="mood-grid">
                {MoodType::ALL.into_iter().map(|mood| view! { <MoodButton mood=mood /> }).collect_view()}
            </div>

            <div id="mood-details" class="mood-details" class:hidden=move || !details_open()>
                <label for="mood-intensity">
                    "Intensity: " <span id="intensity-value">{intensity}</span>
                </label>
                <input
                    type="range"
                    id="mood-intensity"
                    min=MIN_INTENSITY
                    max=MAX_INTENSITY
                    prop:value=move || intensity().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                            state.dispatch(Msg::SetIntensity(value));
                        }
                    }
                />

                <textarea
                    id="mood-notes"
                    placeholder="Anything you'd like to add? (optional)"
                    prop:value=move || state.with_ui(|ui| ui.mood_notes.clone())
                    on:input=move |ev| state.dispatch(Msg::SetMoodNotes(event_target_value(&ev)))
                />

                <BusyButton
                    id="save-mood"
                    label="Save Mood"
                    busy=saving
                    on_click=move || state.dispatch(Msg::SaveMood)
                />
            </div>
        </div>

        <AiPanel panel=Panel::Suggestion id="ai-suggestion" title="💡 Suggestion" />
    }
}

#[component]
fn MoodButton(mood: MoodType) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let selected = move || state.with_ui(|ui| ui.selected_mood == Some(mood));

    view! {
        <button
            class="mood-btn"
            class:selected=selected
            data-mood=mood.as_str()
            style=format!("--mood-color: {}", mood.color())
            on:click=move |_| state.dispatch(Msg::SelectMood(mood))
        >
            <span class="mood-emoji">{mood.emoji()}</span>
            <span class="mood-label">{mood.label()}</span>
        </button>
    }
}

/// Transient panel holding an AI reply; hidden while empty
#[component]
pub fn AiPanel(panel: Panel, id: &'static str, title: &'static str) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let text = move || state.with_ui(|ui| ui.panel(panel).map(str::to_string));

    view! {
        <div id=id class="ai-panel card" class:hidden=move || text().is_none()>
            <h3>{title}</h3>
            <p class="ai-text">{move || text().unwrap_or_default()}</p>
        </div>
    }
}
