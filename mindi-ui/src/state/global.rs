//! Global Dashboard State
//!
//! Wraps the [`Controller`] in a signal. Components read UI state through
//! it and send [`Msg`]s through [`DashboardState::dispatch`]; the effects
//! the controller returns are carried out here against the browser.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

use mindi::render::ChartSlot;
use mindi::{perform, Config, Controller, DashboardView, Effect, Msg, Notice, UiState};

use crate::api::HttpApi;
use crate::components::chart;

/// Viewports at or below this width use the mobile sidebar
const MOBILE_BREAKPOINT: f64 = 768.0;

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub controller: RwSignal<Controller>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
    api: StoredValue<HttpApi>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state(config: Config) -> DashboardState {
    let api = HttpApi::new(config.api.base_url.clone());
    let state = DashboardState {
        controller: create_rw_signal(Controller::new(config)),
        toasts: create_rw_signal(Vec::new()),
        next_toast: store_value(0),
        api: store_value(api),
    };

    provide_context(state);
    state
}

impl DashboardState {
    /// Read a slice of the UI state reactively
    pub fn with_ui<T>(&self, f: impl FnOnce(&UiState) -> T) -> T {
        self.controller.with(|c| f(c.state()))
    }

    /// Memoized slice of the UI state; dependents rerun only when it changes
    pub fn select<T>(self, f: impl Fn(&UiState) -> T + 'static) -> Memo<T>
    where
        T: PartialEq + 'static,
    {
        create_memo(move |_| self.with_ui(&f))
    }

    /// One rendered container. Unchanged HTML is not written to the DOM again.
    pub fn fragment(self, pick: fn(&DashboardView) -> &str) -> Memo<String> {
        self.select(move |ui| pick(&ui.view).to_string())
    }

    pub fn dispatch(self, msg: Msg) {
        let effects = self
            .controller
            .try_update(|c| c.update(msg))
            .unwrap_or_default();

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::Fetch(request) => {
                let api = self.api.get_value();
                spawn_local(async move {
                    let completion = perform(&api, request).await;
                    self.dispatch(Msg::Completed(completion));
                });
            }
            Effect::Notify(notice) => self.show_notice(notice),
            Effect::ScheduleRefresh { after, hide } => {
                Timeout::new(millis(after), move || {
                    self.dispatch(Msg::RefreshDue(hide));
                })
                .forget();
            }
            Effect::StartRefreshTimer { every } => {
                Interval::new(millis(every), move || self.dispatch(Msg::Tick)).forget();
            }
            Effect::DestroyChart(handle) => {
                tracing::debug!(slot = ?handle.slot, id = handle.id, "Destroying chart");
                chart::clear(handle.slot);
            }
            Effect::DrawChart { handle, config } => {
                tracing::debug!(slot = ?handle.slot, id = handle.id, "Drawing chart");
                chart::draw(handle.slot, &config);
            }
            Effect::Redirect(path) => redirect(&path),
        }
    }

    /// Show a notice; it removes itself after its display time
    fn show_notice(self, notice: Notice) {
        tracing::info!(level = ?notice.level, "{}", notice.message);

        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);

        let duration = notice.display_ms();
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toasts = self.toasts;
        Timeout::new(duration, move || {
            toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    /// Toggle the sidebar, picking the mobile or desktop behavior
    pub fn toggle_sidebar(self) {
        self.dispatch(Msg::ToggleSidebar { mobile: is_mobile() });
    }

    /// Canvas currently drawn for `slot`, if any
    pub fn has_chart(&self, slot: ChartSlot) -> bool {
        self.with_ui(|ui| ui.charts.current(slot).is_some())
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|width| width <= MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

fn redirect(path: &str) {
    let result = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|w| w.location().set_href(path).map_err(|e| format!("{:?}", e)));

    if let Err(e) = result {
        tracing::error!(path, "Redirect failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_secs(5)), 5000);
        assert_eq!(millis(Duration::from_secs(300)), 300_000);
        assert_eq!(millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
    }

    #[test]
    fn test_fragment_ignores_unrelated_updates() {
        use mindi::api::DashboardSnapshot;
        use mindi::{Completion, JournalEntry};

        let runtime = create_runtime();
        let state = provide_dashboard_state(Config::default());
        let journal = state.fragment(|view| view.journal_html.as_str());

        // counts how often the container would be rewritten
        let writes = create_memo(move |prev: Option<&u32>| {
            journal.with(|_| ());
            prev.map_or(0, |n| n + 1)
        });
        assert_eq!(writes.get(), 0);

        state.dispatch(Msg::SetJournalDraft("typing".to_string()));
        state.dispatch(Msg::SetJournalDraft("typing more".to_string()));
        assert_eq!(writes.get(), 0);

        let snapshot = DashboardSnapshot {
            journal_entries: vec![JournalEntry {
                id: Some(1),
                content: "Slept well".to_string(),
                mood_tags: Vec::new(),
                timestamp: "2024-05-02T10:00:00".to_string(),
            }],
            ..DashboardSnapshot::default()
        };
        state.dispatch(Msg::Completed(Completion::Dashboard(Ok(snapshot))));
        assert_eq!(writes.get(), 1);
        assert!(journal.get().contains("Slept well"));

        runtime.dispose();
    }
}
