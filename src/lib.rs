//! # Mindi
//!
//! Core of the Mindi wellbeing dashboard: the records the backend serves,
//! the REST contract, the renderers that turn records into HTML fragments
//! and chart configurations, and the controller that keeps UI state, the
//! refresh loop and server-driven re-rendering in step.
//!
//! The crate has no browser dependencies. The Leptos frontend in
//! `mindi-ui/` hosts it; the unit tests host it against an in-memory API.
//!
//! ## Modules
//!
//! - [`models`]: Mood, journal, insight and statistics records
//! - [`api`]: Endpoint contract and request/response bodies
//! - [`fetcher`]: One request in, one completion out
//! - [`render`]: HTML fragments and the mood chart
//! - [`sync`]: UI state, messages, effects and the controller
//! - [`config`]: TOML configuration with overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use mindi::{Config, Controller, Effect, Msg, Request};
//!
//! let mut controller = Controller::new(Config::default());
//!
//! // Page load: fetch the snapshot and start the periodic refresh
//! let effects = controller.update(Msg::Init);
//! assert_eq!(effects[0], Effect::Fetch(Request::Dashboard));
//!
//! // Saving without a selected mood only produces a warning
//! let effects = controller.update(Msg::SaveMood);
//! assert!(matches!(effects.as_slice(), [Effect::Notify(_)]));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod render;
pub mod sync;

pub use api::{DashboardApi, DashboardSnapshot};
pub use config::{Config, ConfigError};
pub use error::{ClientError, ClientResult, ValidationError};
pub use fetcher::{perform, Completion, Request};
pub use models::{Insight, JournalEntry, MoodEntry, MoodStat, MoodType};
pub use render::{ChartConfig, ChartHandle, ChartSlot, DashboardView};
pub use sync::{Controller, Effect, Msg, Notice, NoticeLevel, Panel, Tab, UiState};
