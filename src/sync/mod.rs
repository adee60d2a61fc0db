//! Dashboard Synchronization
//!
//! The [`Controller`] owns the [`UiState`] and reacts to [`Msg`]s coming
//! from user input, timers and finished requests. It never touches the
//! network or the DOM itself: every side effect is returned as an
//! [`Effect`] for the host (the browser app, or a test harness) to carry
//! out. Completed effects come back in as [`Msg::Completed`].
//!
//! ```text
//! user input ─┐
//! timers ─────┼─► Controller::update ─► UiState + [Effect]
//! completions ┘                               │
//!        ▲                                    ▼
//!        └──────── fetcher::perform ◄── Effect::Fetch
//! ```
//!
//! Requests are never cancelled or ordered: when two snapshot requests
//! overlap, whichever completion is dispatched last wins.

pub mod state;

pub use state::{Busy, Panel, Tab, UiState, DEFAULT_INTENSITY, MAX_INTENSITY, MIN_INTENSITY};

use std::time::Duration;

use crate::api::{NewJournalEntry, NewMood};
use crate::config::Config;
use crate::error::{ClientError, ValidationError};
use crate::fetcher::{Completion, Request};
use crate::models::{MoodEntry, MoodType};
use crate::render::{
    mood_chart_config, render_insights, render_journal_entries, render_mood_stats, ChartConfig,
    ChartHandle, ChartSlot,
};

// ============================================
// MESSAGES & EFFECTS
// ============================================

/// Everything that can happen to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page loaded
    Init,
    /// Periodic refresh timer fired
    Tick,
    /// Post-submission delay elapsed
    RefreshDue(Option<Panel>),

    ToggleSidebar { mobile: bool },
    SwitchTab(Tab),

    SelectMood(MoodType),
    SetIntensity(u8),
    SetMoodNotes(String),
    SaveMood,

    SetJournalDraft(String),
    SaveJournal,
    LoadMoreJournal,

    GenerateInsight,
    LoadMoreInsights,

    Logout,

    Completed(Completion),
}

/// Work the host must perform on the controller's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a backend request and dispatch its completion
    Fetch(Request),
    /// Show a transient notice
    Notify(Notice),
    /// Dispatch `Msg::RefreshDue(hide)` once `after` has elapsed
    ScheduleRefresh { after: Duration, hide: Option<Panel> },
    /// Dispatch `Msg::Tick` every `every`, for as long as the page lives
    StartRefreshTimer { every: Duration },
    /// Release a chart that has been replaced
    DestroyChart(ChartHandle),
    /// Draw a chart onto its slot's canvas
    DrawChart { handle: ChartHandle, config: ChartConfig },
    /// Navigate the browser away
    Redirect(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// How long the notice stays on screen
    pub fn display_ms(&self) -> u32 {
        match self.level {
            NoticeLevel::Info | NoticeLevel::Success => 3000,
            NoticeLevel::Warning | NoticeLevel::Error => 5000,
        }
    }
}

pub const MOOD_SAVED: &str = "Mood saved! 🎉";
pub const JOURNAL_SAVED: &str = "Journal entry saved! 📝";
pub const INSIGHT_GENERATED: &str = "New insight generated! ✨";

pub const MOOD_SAVE_FAILED: &str = "Failed to save mood";
pub const JOURNAL_SAVE_FAILED: &str = "Failed to save entry";
pub const INSIGHT_FAILED: &str = "Failed to generate insight";
pub const DASHBOARD_FAILED: &str = "Failed to load dashboard";
pub const HISTORY_FAILED: &str = "Failed to load mood history";
pub const STATS_FAILED: &str = "Failed to load mood statistics";
pub const JOURNAL_PAGE_FAILED: &str = "Failed to load journal entries";
pub const INSIGHT_PAGE_FAILED: &str = "Failed to load insights";
pub const LOGOUT_FAILED: &str = "Logout failed. Please try again.";

// ============================================
// CONTROLLER
// ============================================

/// Owns the UI state and decides what happens next
#[derive(Debug, Clone)]
pub struct Controller {
    config: Config,
    state: UiState,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        let state = UiState {
            journal_limit: config.pages.journal_page,
            insights_limit: config.pages.insights_page,
            ..UiState::default()
        };
        Self { config, state }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply one message and return the effects it requires
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        tracing::debug!(?msg, "Dashboard update");

        match msg {
            Msg::Init => vec![
                Effect::Fetch(Request::Dashboard),
                Effect::StartRefreshTimer {
                    every: self.config.refresh.interval(),
                },
            ],
            Msg::Tick => vec![Effect::Fetch(Request::Dashboard)],
            Msg::RefreshDue(hide) => {
                if let Some(panel) = hide {
                    self.state.hide_panel(panel);
                }
                vec![Effect::Fetch(Request::Dashboard)]
            }

            Msg::ToggleSidebar { mobile } => {
                if mobile {
                    self.state.sidebar_mobile_open = !self.state.sidebar_mobile_open;
                } else {
                    self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
                }
                Vec::new()
            }
            Msg::SwitchTab(tab) => self.switch_tab(tab),

            Msg::SelectMood(mood) => {
                self.state.selected_mood = Some(mood);
                self.state.mood_details_open = true;
                Vec::new()
            }
            Msg::SetIntensity(value) => {
                self.state.intensity = value.clamp(MIN_INTENSITY, MAX_INTENSITY);
                Vec::new()
            }
            Msg::SetMoodNotes(notes) => {
                self.state.mood_notes = notes;
                Vec::new()
            }
            Msg::SaveMood => self.save_mood(),

            Msg::SetJournalDraft(draft) => {
                self.state.journal_draft = draft;
                Vec::new()
            }
            Msg::SaveJournal => self.save_journal(),
            Msg::LoadMoreJournal => {
                self.state.journal_limit = self
                    .state
                    .journal_limit
                    .saturating_add(self.config.pages.journal_page);
                vec![Effect::Fetch(Request::JournalPage {
                    limit: self.state.journal_limit,
                })]
            }

            Msg::GenerateInsight => {
                self.state.busy.generating_insight = true;
                vec![Effect::Fetch(Request::GenerateInsight)]
            }
            Msg::LoadMoreInsights => {
                self.state.insights_limit = self
                    .state
                    .insights_limit
                    .saturating_add(self.config.pages.insights_page);
                vec![Effect::Fetch(Request::InsightPage {
                    limit: self.state.insights_limit,
                })]
            }

            Msg::Logout => vec![Effect::Fetch(Request::Logout)],

            Msg::Completed(completion) => self.complete(completion),
        }
    }

    fn switch_tab(&mut self, tab: Tab) -> Vec<Effect> {
        self.state.active_tab = tab;
        self.state.sidebar_mobile_open = false;

        if tab == Tab::Analytics {
            vec![
                Effect::Fetch(Request::MoodHistory {
                    limit: self.config.pages.history_limit,
                }),
                Effect::Fetch(Request::MoodStats {
                    days: self.config.pages.stats_days,
                }),
            ]
        } else {
            Vec::new()
        }
    }

    fn save_mood(&mut self) -> Vec<Effect> {
        let Some(mood) = self.state.selected_mood else {
            return rejected(ValidationError::NoMoodSelected);
        };

        self.state.busy.saving_mood = true;
        vec![Effect::Fetch(Request::SubmitMood(NewMood {
            mood_type: mood.as_str().to_string(),
            intensity: self.state.intensity,
            notes: self.state.mood_notes.trim().to_string(),
        }))]
    }

    fn save_journal(&mut self) -> Vec<Effect> {
        let content = self.state.journal_draft.trim();
        if content.is_empty() {
            return rejected(ValidationError::EmptyJournal);
        }

        self.state.busy.saving_journal = true;
        vec![Effect::Fetch(Request::SubmitJournal(NewJournalEntry {
            content: content.to_string(),
            mood_tags: Vec::new(),
        }))]
    }

    fn complete(&mut self, completion: Completion) -> Vec<Effect> {
        match completion {
            Completion::Dashboard(Ok(snapshot)) => {
                self.state.view.apply_snapshot(&snapshot);
                // "load more" grows from what the snapshot put on screen
                self.state.journal_limit = page_len(snapshot.journal_entries.len());
                self.state.insights_limit = page_len(snapshot.insights.len());
                self.draw_chart(ChartSlot::Overview, &snapshot.moods)
            }
            Completion::Dashboard(Err(err)) => self.failed(&err, DASHBOARD_FAILED),

            Completion::MoodSaved(result) => {
                self.state.busy.saving_mood = false;
                match result {
                    Ok(saved) if saved.success => {
                        self.state.suggestion = saved.suggestion;
                        self.state.reset_mood_form();
                        self.after_submission(Panel::Suggestion, MOOD_SAVED)
                    }
                    Ok(_) => self.unsuccessful("submit_mood", MOOD_SAVE_FAILED),
                    Err(err) => self.failed(&err, MOOD_SAVE_FAILED),
                }
            }

            Completion::JournalSaved(result) => {
                self.state.busy.saving_journal = false;
                match result {
                    Ok(saved) if saved.success => {
                        self.state.ai_response = saved.ai_response;
                        self.state.journal_draft.clear();
                        self.after_submission(Panel::AiResponse, JOURNAL_SAVED)
                    }
                    Ok(_) => self.unsuccessful("submit_journal", JOURNAL_SAVE_FAILED),
                    Err(err) => self.failed(&err, JOURNAL_SAVE_FAILED),
                }
            }

            Completion::InsightGenerated(result) => {
                self.state.busy.generating_insight = false;
                match result {
                    Ok(generated) if generated.success => vec![
                        Effect::Fetch(Request::Dashboard),
                        Effect::Notify(Notice::success(INSIGHT_GENERATED)),
                    ],
                    Ok(_) => self.unsuccessful("generate_insight", INSIGHT_FAILED),
                    Err(err) => self.failed(&err, INSIGHT_FAILED),
                }
            }

            Completion::MoodHistory(Ok(list)) => self.draw_chart(ChartSlot::History, &list.moods),
            Completion::MoodHistory(Err(err)) => self.failed(&err, HISTORY_FAILED),

            Completion::MoodStats(Ok(stats)) => {
                self.state.view.stats_html = render_mood_stats(&stats.stats);
                Vec::new()
            }
            Completion::MoodStats(Err(err)) => self.failed(&err, STATS_FAILED),

            Completion::JournalPage(Ok(list)) => {
                self.state.view.journal_html = render_journal_entries(&list.entries);
                Vec::new()
            }
            Completion::JournalPage(Err(err)) => self.failed(&err, JOURNAL_PAGE_FAILED),

            Completion::InsightPage(Ok(list)) => {
                self.state.view.insights_html = render_insights(&list.insights);
                Vec::new()
            }
            Completion::InsightPage(Err(err)) => self.failed(&err, INSIGHT_PAGE_FAILED),

            Completion::LoggedOut(Ok(_)) => vec![self.to_login()],
            Completion::LoggedOut(Err(err)) => self.failed(&err, LOGOUT_FAILED),
        }
    }

    /// Refresh later so server-side derived data (suggestions, insights)
    /// has time to land, then hide the panel that was shown
    fn after_submission(&self, panel: Panel, message: &str) -> Vec<Effect> {
        vec![
            Effect::ScheduleRefresh {
                after: self.config.refresh.post_submit_delay(),
                hide: Some(panel),
            },
            Effect::Notify(Notice::success(message)),
        ]
    }

    fn draw_chart(&mut self, slot: ChartSlot, moods: &[MoodEntry]) -> Vec<Effect> {
        let Some(config) = mood_chart_config(moods) else {
            return Vec::new();
        };

        let (handle, previous) = self.state.charts.install(slot);
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = previous {
            effects.push(Effect::DestroyChart(previous));
        }
        effects.push(Effect::DrawChart { handle, config });
        effects
    }

    fn failed(&self, err: &ClientError, message: &str) -> Vec<Effect> {
        if err.is_unauthorized() {
            tracing::info!("Session expired, returning to login");
            return vec![self.to_login()];
        }
        vec![Effect::Notify(Notice::error(message))]
    }

    fn unsuccessful(&self, request: &str, message: &str) -> Vec<Effect> {
        tracing::error!(request, "Backend reported success: false");
        vec![Effect::Notify(Notice::error(message))]
    }

    fn to_login(&self) -> Effect {
        Effect::Redirect(self.config.api.login_path.clone())
    }
}

fn page_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn rejected(reason: ValidationError) -> Vec<Effect> {
    tracing::warn!(%reason, "Submission rejected locally");
    vec![Effect::Notify(Notice::warning(reason.to_string()))]
}
