//! Renderers
//!
//! Pure functions from fetched records to HTML fragments. Each fragment
//! replaces the whole content of one container, so a container is always
//! written in a single step.
//!
//! Every piece of user-supplied text goes through [`escape_html`] after
//! truncation. Truncation is counted in characters of the raw text.

pub mod chart;

pub use chart::{mood_chart_config, ChartConfig, ChartHandle, ChartSlot, ChartSlots};

use crate::api::DashboardSnapshot;
use crate::models::{mood_emoji, parse_timestamp, Insight, JournalEntry, MoodStat};

/// Journal cards show at most this many characters
pub const JOURNAL_PREVIEW_CHARS: usize = 200;

/// Overview insight cards show at most this many characters
pub const INSIGHT_PREVIEW_CHARS: usize = 150;

/// How many insights the overview tab lists
pub const OVERVIEW_INSIGHTS: usize = 2;

pub const EMPTY_JOURNAL: &str = "No journal entries yet. Start writing!";
pub const EMPTY_INSIGHTS: &str =
    "Click \"Generate New Insight\" to receive personalized guidance.";
pub const EMPTY_OVERVIEW_INSIGHTS: &str = "No insights yet";
pub const EMPTY_MOOD_STATS: &str = "Start tracking moods to see statistics!";

// ============================================
// TEXT HELPERS
// ============================================

/// Replace `& < > " '` with entity references
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep the first `max` characters, appending `...` when anything was cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn journal_preview(content: &str) -> String {
    truncate_chars(content, JOURNAL_PREVIEW_CHARS)
}

pub fn insight_preview(text: &str) -> String {
    truncate_chars(text, INSIGHT_PREVIEW_CHARS)
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Card date label, e.g. `Jan 5, 02:30 PM`. Unparseable input is returned raw.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %-d, %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Chart axis label, e.g. `1/5`
pub fn format_short_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%-m/%-d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn empty_state(message: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>", escape_html(message))
}

// ============================================
// CONTAINER RENDERERS
// ============================================

/// Journal list (`#entries-list`)
pub fn render_journal_entries(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return empty_state(EMPTY_JOURNAL);
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "<div class=\"entry-card\">\
                 <div class=\"entry-date\">{}</div>\
                 <div class=\"entry-content\">{}</div>\
                 </div>",
                escape_html(&format_date(&entry.timestamp)),
                escape_html(&journal_preview(&entry.content)),
            )
        })
        .collect()
}

/// Full insight list (`#insights-container`)
pub fn render_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return empty_state(EMPTY_INSIGHTS);
    }

    insights
        .iter()
        .map(|insight| {
            format!(
                "<div class=\"insight-card\">\
                 <div class=\"insight-header\">\
                 <span class=\"insight-icon\">💡</span>\
                 <span class=\"insight-date\">{}</span>\
                 </div>\
                 <div class=\"insight-text\">{}</div>\
                 </div>",
                escape_html(&format_date(&insight.timestamp)),
                escape_html(&insight.insight_text),
            )
        })
        .collect()
}

/// Overview insight previews (`#overview-insights-list`): the first two,
/// cut to [`INSIGHT_PREVIEW_CHARS`]
pub fn render_overview_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return empty_state(EMPTY_OVERVIEW_INSIGHTS);
    }

    insights
        .iter()
        .take(OVERVIEW_INSIGHTS)
        .map(|insight| {
            format!(
                "<div class=\"insight-card\"><div class=\"insight-text\">{}</div></div>",
                escape_html(&insight_preview(&insight.insight_text)),
            )
        })
        .collect()
}

/// Mood statistics grid (`#mood-stats`)
pub fn render_mood_stats(stats: &[MoodStat]) -> String {
    if stats.is_empty() {
        return empty_state(EMPTY_MOOD_STATS);
    }

    stats
        .iter()
        .map(|stat| {
            format!(
                "<div class=\"mood-stat-card\">\
                 <div class=\"mood-stat-emoji\">{}</div>\
                 <div class=\"mood-stat-label\">{}</div>\
                 <div class=\"mood-stat-count\">{}x</div>\
                 </div>",
                mood_emoji(&stat.mood_type),
                escape_html(&capitalize_first(&stat.mood_type)),
                stat.count,
            )
        })
        .collect()
}

// ============================================
// DASHBOARD VIEW
// ============================================

/// Overview counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub moods: usize,
    pub journal_entries: usize,
    pub insights: usize,
}

/// Rendered content of every data container on the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub counts: OverviewCounts,
    pub overview_insights_html: String,
    pub journal_html: String,
    pub insights_html: String,
    /// Only filled from `/api/mood/stats` (analytics tab)
    pub stats_html: String,
}

impl DashboardView {
    /// Replace everything a snapshot covers
    pub fn apply_snapshot(&mut self, snapshot: &DashboardSnapshot) {
        self.counts = OverviewCounts {
            moods: snapshot.moods.len(),
            journal_entries: snapshot.journal_entries.len(),
            insights: snapshot.insights.len(),
        };
        self.overview_insights_html = render_overview_insights(&snapshot.insights);
        self.journal_html = render_journal_entries(&snapshot.journal_entries);
        self.insights_html = render_insights(&snapshot.insights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal(content: &str) -> JournalEntry {
        JournalEntry {
            id: None,
            content: content.to_string(),
            mood_tags: Vec::new(),
            timestamp: "2024-01-05T14:30:00".to_string(),
        }
    }

    fn insight(text: &str) -> Insight {
        Insight {
            id: None,
            insight_text: text.to_string(),
            timestamp: "2024-01-05T09:05:00".to_string(),
        }
    }

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escaped_output_has_no_raw_markup() {
        let html = render_journal_entries(&[journal("<script>alert('x')</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    }

    #[test]
    fn test_journal_preview_threshold() {
        let exact = "a".repeat(200);
        assert_eq!(journal_preview(&exact), exact);

        let long = "b".repeat(201);
        assert_eq!(journal_preview(&long), format!("{}...", "b".repeat(200)));
    }

    #[test]
    fn test_insight_preview_threshold() {
        let exact = "c".repeat(150);
        assert_eq!(insight_preview(&exact), exact);

        let long = "d".repeat(151);
        assert_eq!(insight_preview(&long), format!("{}...", "d".repeat(150)));
    }

    #[test]
    fn test_truncation_counts_raw_text_not_entities() {
        // 200 ampersands escape to 1000 bytes but must not be cut
        let content = "&".repeat(200);
        let html = render_journal_entries(&[journal(&content)]);
        assert!(html.contains(&"&amp;".repeat(200)));
        assert!(!html.contains("..."));

        let over = format!("{}<", "x".repeat(200));
        let html = render_journal_entries(&[journal(&over)]);
        assert!(html.contains(&format!("{}...", "x".repeat(200))));
        assert!(!html.contains("&lt;"));
    }

    #[test]
    fn test_truncation_is_char_based() {
        let text = "é".repeat(151);
        let preview = insight_preview(&text);
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("é..."));
    }

    #[test]
    fn test_empty_journal_renders_single_placeholder() {
        let html = render_journal_entries(&[]);
        assert_eq!(
            html,
            "<p class=\"empty-state\">No journal entries yet. Start writing!</p>"
        );
        assert!(!html.contains("entry-card"));
    }

    #[test]
    fn test_empty_placeholders_per_container() {
        assert_eq!(render_insights(&[]).matches("empty-state").count(), 1);
        assert!(render_insights(&[]).contains("&quot;Generate New Insight&quot;"));
        assert!(render_overview_insights(&[]).contains(EMPTY_OVERVIEW_INSIGHTS));
        assert!(render_mood_stats(&[]).contains(EMPTY_MOOD_STATS));
    }

    #[test]
    fn test_journal_cards_one_per_entry() {
        let html = render_journal_entries(&[journal("first"), journal("second")]);
        assert_eq!(html.matches("class=\"entry-card\"").count(), 2);
        assert!(html.contains("Jan 5, 02:30 PM"));
    }

    #[test]
    fn test_overview_insights_take_two_with_preview() {
        let long = "z".repeat(160);
        let html = render_overview_insights(&[insight(&long), insight("two"), insight("three")]);
        assert_eq!(html.matches("insight-card").count(), 2);
        assert!(html.contains(&format!("{}...", "z".repeat(150))));
        assert!(!html.contains("three"));
    }

    #[test]
    fn test_full_insights_not_truncated() {
        let long = "y".repeat(400);
        let html = render_insights(&[insight(&long)]);
        assert!(html.contains(&long));
        assert!(html.contains("Jan 5, 09:05 AM"));
    }

    #[test]
    fn test_mood_stats_cards() {
        let html = render_mood_stats(&[
            MoodStat {
                mood_type: "happy".to_string(),
                count: 3,
                avg_intensity: 7.5,
            },
            MoodStat {
                mood_type: "<odd>".to_string(),
                count: 1,
                avg_intensity: 2.0,
            },
        ]);
        assert!(html.contains("😊"));
        assert!(html.contains(">Happy<"));
        assert!(html.contains(">3x<"));
        assert!(html.contains("😐"));
        assert!(html.contains("&lt;odd&gt;"));
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date("2024-11-23T00:07:00"), "Nov 23, 12:07 AM");
        assert_eq!(format_short_date("2024-11-23T00:07:00"), "11/23");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("energetic"), "Energetic");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_apply_snapshot_counts_and_fragments() {
        let snapshot = DashboardSnapshot {
            moods: Vec::new(),
            journal_entries: vec![journal("hello")],
            insights: vec![insight("a"), insight("b"), insight("c")],
            stats: Vec::new(),
        };

        let mut view = DashboardView::default();
        view.stats_html = "kept".to_string();
        view.apply_snapshot(&snapshot);

        assert_eq!(
            view.counts,
            OverviewCounts {
                moods: 0,
                journal_entries: 1,
                insights: 3
            }
        );
        assert!(view.journal_html.contains("hello"));
        assert_eq!(view.insights_html.matches("insight-header").count(), 3);
        assert_eq!(view.overview_insights_html.matches("insight-card").count(), 2);
        assert_eq!(view.stats_html, "kept");
    }
}
