//! Data Transfer Objects
//!
//! Request and response bodies for the backend endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::models::{Insight, JournalEntry, MoodEntry, MoodStat};

// ============================================
// DASHBOARD DTOs
// ============================================

/// Consolidated payload from `GET /api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Newest first
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub stats: Vec<MoodStat>,
}

// ============================================
// MOOD DTOs
// ============================================

/// Body of `POST /api/mood`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMood {
    pub mood_type: String,
    pub intensity: u8,
    pub notes: String,
}

/// Response to `POST /api/mood`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodSaved {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub mood_id: Option<i64>,
    /// Short AI suggestion shown under the mood picker
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Response to `GET /api/mood`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodList {
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
}

/// Response to `GET /api/mood/stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodStats {
    #[serde(default)]
    pub stats: Vec<MoodStat>,
}

// ============================================
// JOURNAL DTOs
// ============================================

/// Body of `POST /api/journal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub content: String,
    /// Always sent empty by the dashboard
    pub mood_tags: Vec<String>,
}

/// Response to `POST /api/journal`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JournalSaved {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub entry_id: Option<i64>,
    #[serde(default)]
    pub ai_response: Option<String>,
}

/// Response to `GET /api/journal`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JournalList {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

// ============================================
// INSIGHT DTOs
// ============================================

/// Response to `POST /api/insights`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsightGenerated {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub insight_id: Option<i64>,
    #[serde(default)]
    pub insight: Option<String>,
    #[serde(default)]
    pub insight_text: Option<String>,
}

impl InsightGenerated {
    /// Generated text, whichever field the backend used
    pub fn text(&self) -> Option<&str> {
        self.insight.as_deref().or(self.insight_text.as_deref())
    }
}

/// Response to `GET /api/insights`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsightList {
    #[serde(default)]
    pub insights: Vec<Insight>,
}

// ============================================
// SESSION DTOs
// ============================================

/// Response to `POST /api/logout`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggedOut {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_missing_lists_default_empty() {
        let snapshot: DashboardSnapshot =
            serde_json::from_str(r#"{"moods": [], "insights": []}"#).unwrap();
        assert!(snapshot.journal_entries.is_empty());
        assert!(snapshot.stats.is_empty());
    }

    #[test]
    fn test_insight_text_either_field() {
        let a: InsightGenerated =
            serde_json::from_str(r#"{"success": true, "insight": "Walk more"}"#).unwrap();
        assert_eq!(a.text(), Some("Walk more"));

        let b: InsightGenerated =
            serde_json::from_str(r#"{"success": true, "insight_text": "Sleep early"}"#).unwrap();
        assert_eq!(b.text(), Some("Sleep early"));
    }

    #[test]
    fn test_new_mood_body_shape() {
        let body = serde_json::to_value(NewMood {
            mood_type: "calm".to_string(),
            intensity: 4,
            notes: String::new(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"mood_type": "calm", "intensity": 4, "notes": ""})
        );
    }
}
