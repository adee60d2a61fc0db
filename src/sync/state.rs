//! UI State
//!
//! Everything the dashboard remembers between events. Nothing here is
//! persisted; a page reload starts from [`UiState::default`].

use crate::models::MoodType;
use crate::render::{ChartSlots, DashboardView};

/// Intensity the slider starts at and resets to
pub const DEFAULT_INTENSITY: u8 = 5;
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// Navigation tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Mood,
    Journal,
    Insights,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Mood,
        Tab::Journal,
        Tab::Insights,
        Tab::Analytics,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Mood => "mood",
            Tab::Journal => "journal",
            Tab::Insights => "insights",
            Tab::Analytics => "analytics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Mood => "Mood Tracker",
            Tab::Journal => "Journal",
            Tab::Insights => "Insights",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "🏠",
            Tab::Mood => "😊",
            Tab::Journal => "📝",
            Tab::Insights => "💡",
            Tab::Analytics => "📊",
        }
    }
}

/// Transient AI panels shown after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Suggestion returned with a saved mood
    Suggestion,
    /// Reply returned with a saved journal entry
    AiResponse,
}

/// Submit controls that show a loading indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Busy {
    pub saving_mood: bool,
    pub saving_journal: bool,
    pub generating_insight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub active_tab: Tab,
    pub sidebar_collapsed: bool,
    pub sidebar_mobile_open: bool,

    pub selected_mood: Option<MoodType>,
    pub mood_details_open: bool,
    pub intensity: u8,
    pub mood_notes: String,

    pub journal_draft: String,

    pub busy: Busy,
    pub suggestion: Option<String>,
    pub ai_response: Option<String>,

    /// Entries currently listed; "load more" asks for one page beyond
    pub journal_limit: u32,
    pub insights_limit: u32,

    pub view: DashboardView,
    pub charts: ChartSlots,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            sidebar_collapsed: false,
            sidebar_mobile_open: false,
            selected_mood: None,
            mood_details_open: false,
            intensity: DEFAULT_INTENSITY,
            mood_notes: String::new(),
            journal_draft: String::new(),
            busy: Busy::default(),
            suggestion: None,
            ai_response: None,
            journal_limit: 0,
            insights_limit: 0,
            view: DashboardView::default(),
            charts: ChartSlots::default(),
        }
    }
}

impl UiState {
    /// Character count shown under the journal text area
    pub fn journal_char_count(&self) -> usize {
        self.journal_draft.chars().count()
    }

    pub fn panel(&self, panel: Panel) -> Option<&str> {
        match panel {
            Panel::Suggestion => self.suggestion.as_deref(),
            Panel::AiResponse => self.ai_response.as_deref(),
        }
    }

    pub(crate) fn hide_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Suggestion => self.suggestion = None,
            Panel::AiResponse => self.ai_response = None,
        }
    }

    /// Back to an unselected mood with the default intensity
    pub(crate) fn reset_mood_form(&mut self) {
        self.selected_mood = None;
        self.mood_details_open = false;
        self.intensity = DEFAULT_INTENSITY;
        self.mood_notes.clear();
    }
}
