//! In-memory [`DashboardApi`] for tests. Records every call in order.

use async_trait::async_trait;
use std::cell::RefCell;

use super::*;
use crate::error::{ClientError, ClientResult};

/// A request as seen by the fake backend
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Dashboard,
    SubmitMood(NewMood),
    Moods(u32),
    MoodStats(u32),
    SubmitJournal(NewJournalEntry),
    Journal(u32),
    GenerateInsight,
    Insights(u32),
    Logout,
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub snapshot: RefCell<DashboardSnapshot>,
    pub moods: RefCell<Vec<crate::models::MoodEntry>>,
    pub stats: RefCell<Vec<crate::models::MoodStat>>,
    pub suggestion: RefCell<Option<String>>,
    pub ai_response: RefCell<Option<String>>,
    pub insight: RefCell<Option<String>>,
    /// When set, every call fails with this error
    pub fail_with: RefCell<Option<ClientError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ClientError) -> Self {
        let api = Self::default();
        *api.fail_with.borrow_mut() = Some(error);
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn fetch_dashboard(&self) -> ClientResult<DashboardSnapshot> {
        self.record(Call::Dashboard)?;
        Ok(self.snapshot.borrow().clone())
    }

    async fn submit_mood(&self, mood: &NewMood) -> ClientResult<MoodSaved> {
        self.record(Call::SubmitMood(mood.clone()))?;
        Ok(MoodSaved {
            success: true,
            mood_id: Some(1),
            suggestion: self.suggestion.borrow().clone(),
        })
    }

    async fn fetch_moods(&self, limit: u32) -> ClientResult<MoodList> {
        self.record(Call::Moods(limit))?;
        Ok(MoodList {
            moods: self.moods.borrow().clone(),
        })
    }

    async fn fetch_mood_stats(&self, days: u32) -> ClientResult<MoodStats> {
        self.record(Call::MoodStats(days))?;
        Ok(MoodStats {
            stats: self.stats.borrow().clone(),
        })
    }

    async fn submit_journal(&self, entry: &NewJournalEntry) -> ClientResult<JournalSaved> {
        self.record(Call::SubmitJournal(entry.clone()))?;
        Ok(JournalSaved {
            success: true,
            entry_id: Some(1),
            ai_response: self.ai_response.borrow().clone(),
        })
    }

    async fn fetch_journal(&self, limit: u32) -> ClientResult<JournalList> {
        self.record(Call::Journal(limit))?;
        Ok(JournalList {
            entries: self.snapshot.borrow().journal_entries.clone(),
        })
    }

    async fn generate_insight(&self) -> ClientResult<InsightGenerated> {
        self.record(Call::GenerateInsight)?;
        Ok(InsightGenerated {
            success: true,
            insight_id: Some(1),
            insight: self.insight.borrow().clone(),
            insight_text: None,
        })
    }

    async fn fetch_insights(&self, limit: u32) -> ClientResult<InsightList> {
        self.record(Call::Insights(limit))?;
        Ok(InsightList {
            insights: self.snapshot.borrow().insights.clone(),
        })
    }

    async fn logout(&self) -> ClientResult<LoggedOut> {
        self.record(Call::Logout)?;
        Ok(LoggedOut { success: true })
    }
}
