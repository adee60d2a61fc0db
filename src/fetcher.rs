//! Data Fetcher
//!
//! Turns a [`Request`] into exactly one backend call and exactly one
//! [`Completion`]. There is no retry, backoff or deduplication; each
//! request stands alone.

use crate::api::{
    DashboardApi, DashboardSnapshot, InsightGenerated, InsightList, JournalList, JournalSaved,
    LoggedOut, MoodList, MoodSaved, MoodStats, NewJournalEntry, NewMood,
};
use crate::error::ClientResult;

/// An outgoing backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Dashboard,
    SubmitMood(NewMood),
    MoodHistory { limit: u32 },
    MoodStats { days: u32 },
    SubmitJournal(NewJournalEntry),
    JournalPage { limit: u32 },
    GenerateInsight,
    InsightPage { limit: u32 },
    Logout,
}

impl Request {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Request::Dashboard => "dashboard",
            Request::SubmitMood(_) => "submit_mood",
            Request::MoodHistory { .. } => "mood_history",
            Request::MoodStats { .. } => "mood_stats",
            Request::SubmitJournal(_) => "submit_journal",
            Request::JournalPage { .. } => "journal_page",
            Request::GenerateInsight => "generate_insight",
            Request::InsightPage { .. } => "insight_page",
            Request::Logout => "logout",
        }
    }
}

/// Outcome of a [`Request`], success or failure
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Dashboard(ClientResult<DashboardSnapshot>),
    MoodSaved(ClientResult<MoodSaved>),
    MoodHistory(ClientResult<MoodList>),
    MoodStats(ClientResult<MoodStats>),
    JournalSaved(ClientResult<JournalSaved>),
    JournalPage(ClientResult<JournalList>),
    InsightGenerated(ClientResult<InsightGenerated>),
    InsightPage(ClientResult<InsightList>),
    LoggedOut(ClientResult<LoggedOut>),
}

impl Completion {
    fn error(&self) -> Option<&crate::error::ClientError> {
        match self {
            Completion::Dashboard(r) => r.as_ref().err(),
            Completion::MoodSaved(r) => r.as_ref().err(),
            Completion::MoodHistory(r) => r.as_ref().err(),
            Completion::MoodStats(r) => r.as_ref().err(),
            Completion::JournalSaved(r) => r.as_ref().err(),
            Completion::JournalPage(r) => r.as_ref().err(),
            Completion::InsightGenerated(r) => r.as_ref().err(),
            Completion::InsightPage(r) => r.as_ref().err(),
            Completion::LoggedOut(r) => r.as_ref().err(),
        }
    }
}

/// Issue one request and wrap its outcome
pub async fn perform<A>(api: &A, request: Request) -> Completion
where
    A: DashboardApi + ?Sized,
{
    let name = request.name();
    tracing::debug!(request = name, "Sending request");

    let completion = match request {
        Request::Dashboard => Completion::Dashboard(api.fetch_dashboard().await),
        Request::SubmitMood(mood) => Completion::MoodSaved(api.submit_mood(&mood).await),
        Request::MoodHistory { limit } => Completion::MoodHistory(api.fetch_moods(limit).await),
        Request::MoodStats { days } => Completion::MoodStats(api.fetch_mood_stats(days).await),
        Request::SubmitJournal(entry) => {
            Completion::JournalSaved(api.submit_journal(&entry).await)
        }
        Request::JournalPage { limit } => Completion::JournalPage(api.fetch_journal(limit).await),
        Request::GenerateInsight => Completion::InsightGenerated(api.generate_insight().await),
        Request::InsightPage { limit } => {
            Completion::InsightPage(api.fetch_insights(limit).await)
        }
        Request::Logout => Completion::LoggedOut(api.logout().await),
    };

    if let Some(err) = completion.error() {
        tracing::error!(request = name, error = %err, "Request failed");
    }

    completion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use crate::error::ClientError;

    #[tokio::test]
    async fn test_one_call_per_request() {
        let api = FakeApi::new();

        perform(&api, Request::Dashboard).await;
        perform(&api, Request::MoodHistory { limit: 20 }).await;
        perform(&api, Request::MoodStats { days: 7 }).await;

        assert_eq!(
            api.calls(),
            vec![Call::Dashboard, Call::Moods(20), Call::MoodStats(7)]
        );
    }

    #[tokio::test]
    async fn test_submission_body_forwarded() {
        let api = FakeApi::new();
        *api.suggestion.borrow_mut() = Some("Take a walk".to_string());

        let mood = NewMood {
            mood_type: "happy".to_string(),
            intensity: 8,
            notes: "sunny".to_string(),
        };
        let completion = perform(&api, Request::SubmitMood(mood.clone())).await;

        assert_eq!(api.calls(), vec![Call::SubmitMood(mood)]);
        match completion {
            Completion::MoodSaved(Ok(saved)) => {
                assert!(saved.success);
                assert_eq!(saved.suggestion.as_deref(), Some("Take a walk"));
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_error_completion() {
        let api = FakeApi::failing(ClientError::Unauthorized);

        let completion = perform(&api, Request::GenerateInsight).await;

        assert_eq!(
            completion,
            Completion::InsightGenerated(Err(ClientError::Unauthorized))
        );
        assert_eq!(api.calls().len(), 1);
    }
}
