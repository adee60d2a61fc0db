//! Backend API Contract
//!
//! The dashboard talks to a fixed set of JSON endpoints. [`DashboardApi`]
//! is the seam: the browser build implements it with `gloo-net`, tests
//! implement it in memory.
//!
//! # Endpoints
//!
//! - `GET  /api/dashboard` - Consolidated snapshot
//! - `POST /api/mood` - Log a mood
//! - `GET  /api/mood?limit=N` - Recent moods
//! - `GET  /api/mood/stats?days=N` - Per-mood aggregates
//! - `POST /api/journal` - Write a journal entry
//! - `GET  /api/journal?limit=N` - Recent journal entries
//! - `POST /api/insights` - Generate one insight
//! - `GET  /api/insights?limit=N` - Recent insights
//! - `POST /api/logout` - End the session

pub mod dto;

#[cfg(test)]
pub(crate) mod fake;

pub use dto::{
    DashboardSnapshot, InsightGenerated, InsightList, JournalList, JournalSaved, LoggedOut,
    MoodList, MoodSaved, MoodStats, NewJournalEntry, NewMood,
};

use async_trait::async_trait;

use crate::error::ClientResult;

/// Endpoint paths, relative to the configured base URL
pub mod paths {
    pub const DASHBOARD: &str = "/api/dashboard";
    pub const MOOD: &str = "/api/mood";
    pub const MOOD_STATS: &str = "/api/mood/stats";
    pub const JOURNAL: &str = "/api/journal";
    pub const INSIGHTS: &str = "/api/insights";
    pub const LOGOUT: &str = "/api/logout";
}

/// Join a base URL and an endpoint path, with an optional query
pub fn endpoint_url(base: &str, path: &str, query: Option<(&str, u32)>) -> String {
    let base = base.trim_end_matches('/');
    match query {
        Some((key, value)) => format!("{}{}?{}={}", base, path, key, value),
        None => format!("{}{}", base, path),
    }
}

/// One async method per backend endpoint.
///
/// `?Send` because browser futures are bound to the UI thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn fetch_dashboard(&self) -> ClientResult<DashboardSnapshot>;

    async fn submit_mood(&self, mood: &NewMood) -> ClientResult<MoodSaved>;

    async fn fetch_moods(&self, limit: u32) -> ClientResult<MoodList>;

    async fn fetch_mood_stats(&self, days: u32) -> ClientResult<MoodStats>;

    async fn submit_journal(&self, entry: &NewJournalEntry) -> ClientResult<JournalSaved>;

    async fn fetch_journal(&self, limit: u32) -> ClientResult<JournalList>;

    async fn generate_insight(&self) -> ClientResult<InsightGenerated>;

    async fn fetch_insights(&self, limit: u32) -> ClientResult<InsightList>;

    async fn logout(&self) -> ClientResult<LoggedOut>;
}
