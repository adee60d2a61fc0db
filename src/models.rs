//! Domain Records
//!
//! Records returned by the Mindi backend. They are consumed as-is: the
//! dashboard never edits them, it only reads fields for display.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================
// MOOD TYPES
// ============================================

/// The closed set of moods the tracker offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Happy,
    Calm,
    Energetic,
    Sad,
    Anxious,
    Angry,
    Tired,
    Neutral,
}

impl MoodType {
    /// All moods in the order the mood picker shows them
    pub const ALL: [MoodType; 8] = [
        MoodType::Happy,
        MoodType::Calm,
        MoodType::Energetic,
        MoodType::Sad,
        MoodType::Anxious,
        MoodType::Angry,
        MoodType::Tired,
        MoodType::Neutral,
    ];

    /// Parse a backend mood string; anything unrecognized is `Neutral`
    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or(MoodType::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodType::Happy => "happy",
            MoodType::Calm => "calm",
            MoodType::Energetic => "energetic",
            MoodType::Sad => "sad",
            MoodType::Anxious => "anxious",
            MoodType::Angry => "angry",
            MoodType::Tired => "tired",
            MoodType::Neutral => "neutral",
        }
    }

    /// Chart point color
    pub fn color(&self) -> &'static str {
        match self {
            MoodType::Happy => "#FFD93D",
            MoodType::Calm => "#6BCB77",
            MoodType::Energetic => "#FF6B6B",
            MoodType::Sad => "#4D96A9",
            MoodType::Anxious => "#FFB4A2",
            MoodType::Angry => "#E85555",
            MoodType::Tired => "#BDC3C7",
            MoodType::Neutral => "#7F8C8D",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodType::Happy => "😊",
            MoodType::Calm => "😌",
            MoodType::Energetic => "🤩",
            MoodType::Sad => "😢",
            MoodType::Anxious => "😰",
            MoodType::Angry => "😠",
            MoodType::Tired => "😴",
            MoodType::Neutral => "😐",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodType::Happy => "Happy",
            MoodType::Calm => "Calm",
            MoodType::Energetic => "Energetic",
            MoodType::Sad => "Sad",
            MoodType::Anxious => "Anxious",
            MoodType::Angry => "Angry",
            MoodType::Tired => "Tired",
            MoodType::Neutral => "Neutral",
        }
    }
}

impl FromStr for MoodType {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodType::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mood string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood type: {0}")]
pub struct UnknownMood(pub String);

/// Color for a raw backend mood string, falling back to neutral
pub fn mood_color(mood_type: &str) -> &'static str {
    MoodType::parse_lossy(mood_type).color()
}

/// Emoji for a raw backend mood string, falling back to neutral
pub fn mood_emoji(mood_type: &str) -> &'static str {
    MoodType::parse_lossy(mood_type).emoji()
}

// ============================================
// RECORDS
// ============================================

/// A single logged mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(default)]
    pub id: Option<i64>,
    /// Kept as the raw string so unknown moods still render (as neutral)
    pub mood_type: String,
    pub intensity: u8,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: String,
}

/// A free-text journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_mood_tags")]
    pub mood_tags: Vec<String>,
    pub timestamp: String,
}

/// A server-generated suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub id: Option<i64>,
    pub insight_text: String,
    pub timestamp: String,
}

/// Per-mood aggregate over a recent window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodStat {
    pub mood_type: String,
    pub count: u32,
    #[serde(default)]
    pub avg_intensity: f64,
}

/// The backend stores tags as a JSON-encoded string column, so a row may
/// carry a list, a string holding a list, or null.
fn deserialize_mood_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Encoded(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(tags)) => tags,
        Some(Tags::Encoded(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        None => Vec::new(),
    })
}

// ============================================
// TIMESTAMPS
// ============================================

/// Parse a backend timestamp.
///
/// Rows are written with a naive local ISO-8601 string; RFC 3339 is
/// accepted too. Offsets are dropped: the wall-clock time is displayed
/// as recorded.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_known_moods_round_trip_through_str() {
        for mood in MoodType::ALL {
            assert_eq!(mood.as_str().parse::<MoodType>(), Ok(mood));
        }
    }

    #[test]
    fn test_unknown_mood_falls_back_to_neutral() {
        for raw in ["ecstatic", "", "HAPPY", "happy "] {
            assert_eq!(mood_color(raw), "#7F8C8D");
            assert_eq!(mood_emoji(raw), "😐");
        }
        assert!("ecstatic".parse::<MoodType>().is_err());
    }

    #[test]
    fn test_lookup_tables() {
        assert_eq!(mood_color("happy"), "#FFD93D");
        assert_eq!(mood_color("sad"), "#4D96A9");
        assert_eq!(mood_emoji("tired"), "😴");
        assert_eq!(mood_emoji("angry"), "😠");
    }

    #[test]
    fn test_journal_tags_accept_all_shapes() {
        let list: JournalEntry = serde_json::from_str(
            r#"{"content": "a", "mood_tags": ["calm"], "timestamp": "2024-01-05T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(list.mood_tags, vec!["calm"]);

        let encoded: JournalEntry = serde_json::from_str(
            r#"{"content": "a", "mood_tags": "[\"sad\", \"tired\"]", "timestamp": "2024-01-05T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(encoded.mood_tags, vec!["sad", "tired"]);

        let null: JournalEntry = serde_json::from_str(
            r#"{"id": 3, "content": "a", "mood_tags": null, "timestamp": "2024-01-05T10:00:00"}"#,
        )
        .unwrap();
        assert!(null.mood_tags.is_empty());

        let missing: JournalEntry =
            serde_json::from_str(r#"{"content": "a", "timestamp": "2024-01-05T10:00:00"}"#).unwrap();
        assert!(missing.mood_tags.is_empty());
    }

    #[test]
    fn test_mood_entry_with_extra_columns() {
        let entry: MoodEntry = serde_json::from_str(
            r#"{"id": 1, "user_id": 7, "mood_type": "calm", "intensity": 6, "notes": null, "timestamp": "2024-03-02T08:15:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(entry.intensity, 6);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let naive = parse_timestamp("2024-03-02T08:15:09.123456").unwrap();
        assert_eq!((naive.month(), naive.day(), naive.hour()), (3, 2, 8));

        let spaced = parse_timestamp("2024-03-02 21:05:00").unwrap();
        assert_eq!(spaced.minute(), 5);

        let rfc = parse_timestamp("2024-03-02T08:15:09+02:00").unwrap();
        assert_eq!(rfc.hour(), 8);

        assert!(parse_timestamp("yesterday").is_none());
    }
}
