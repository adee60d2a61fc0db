//! HTTP API Client
//!
//! [`DashboardApi`] over `gloo-net`. Session cookies ride along with
//! every same-origin request, so no credentials are handled here.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use mindi::api::{
    endpoint_url, paths, DashboardApi, DashboardSnapshot, InsightGenerated, InsightList,
    JournalList, JournalSaved, LoggedOut, MoodList, MoodSaved, MoodStats, NewJournalEntry,
    NewMood,
};
use mindi::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str, query: Option<(&str, u32)>) -> String {
        endpoint_url(&self.base_url, path, query)
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn post_json<B, T>(&self, url: String, body: &B) -> ClientResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }
}

/// Non-2xx responses become [`ClientError`]s, 2xx bodies are decoded
async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn fetch_dashboard(&self) -> ClientResult<DashboardSnapshot> {
        self.get(self.url(paths::DASHBOARD, None)).await
    }

    async fn submit_mood(&self, mood: &NewMood) -> ClientResult<MoodSaved> {
        self.post_json(self.url(paths::MOOD, None), mood).await
    }

    async fn fetch_moods(&self, limit: u32) -> ClientResult<MoodList> {
        self.get(self.url(paths::MOOD, Some(("limit", limit)))).await
    }

    async fn fetch_mood_stats(&self, days: u32) -> ClientResult<MoodStats> {
        self.get(self.url(paths::MOOD_STATS, Some(("days", days)))).await
    }

    async fn submit_journal(&self, entry: &NewJournalEntry) -> ClientResult<JournalSaved> {
        self.post_json(self.url(paths::JOURNAL, None), entry).await
    }

    async fn fetch_journal(&self, limit: u32) -> ClientResult<JournalList> {
        self.get(self.url(paths::JOURNAL, Some(("limit", limit)))).await
    }

    async fn generate_insight(&self) -> ClientResult<InsightGenerated> {
        self.post_empty(self.url(paths::INSIGHTS, None)).await
    }

    async fn fetch_insights(&self, limit: u32) -> ClientResult<InsightList> {
        self.get(self.url(paths::INSIGHTS, Some(("limit", limit)))).await
    }

    async fn logout(&self) -> ClientResult<LoggedOut> {
        self.post_empty(self.url(paths::LOGOUT, None)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        let api = HttpApi::new("http://localhost:5000/");
        assert_eq!(
            api.url(paths::INSIGHTS, Some(("limit", 5))),
            "http://localhost:5000/api/insights?limit=5"
        );
        assert_eq!(HttpApi::new("").url(paths::LOGOUT, None), "/api/logout");
    }
}
