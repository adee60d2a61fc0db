//! Mood Chart
//!
//! Shapes mood entries into a line-chart configuration and tracks which
//! chart instance currently owns each canvas.

use serde::Serialize;

use crate::models::{mood_color, MoodEntry};
use crate::render::format_short_date;

/// At most this many entries are plotted
pub const CHART_POINTS: usize = 10;

pub const LINE_COLOR: &str = "#FF6B6B";
pub const FILL_COLOR: &str = "rgba(255, 107, 107, 0.1)";
pub const Y_MAX: u8 = 10;
pub const Y_STEP: u8 = 2;

/// Chart.js-shaped configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    /// Raw intensities, oldest first
    pub data: Vec<u8>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub border_width: f64,
    pub tension: f64,
    pub fill: bool,
    pub point_background_color: Vec<&'static str>,
    pub point_border_color: &'static str,
    pub point_border_width: f64,
    pub point_radius: f64,
    pub point_hover_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: YAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub max: u8,
    pub step_size: u8,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            scales: Scales {
                y: YAxis {
                    begin_at_zero: true,
                    max: Y_MAX,
                    step_size: Y_STEP,
                },
            },
        }
    }
}

impl ChartConfig {
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// The single intensity series
    pub fn series(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }
}

/// Build the intensity chart from newest-first entries.
///
/// Keeps the [`CHART_POINTS`] most recent entries and plots them oldest
/// first. Returns `None` for an empty list so any existing chart stays.
pub fn mood_chart_config(moods: &[MoodEntry]) -> Option<ChartConfig> {
    if moods.is_empty() {
        return None;
    }

    let recent: Vec<&MoodEntry> = moods.iter().take(CHART_POINTS).rev().collect();

    let dataset = Dataset {
        label: "Mood Intensity",
        data: recent.iter().map(|m| m.intensity).collect(),
        border_color: LINE_COLOR,
        background_color: FILL_COLOR,
        border_width: 3.0,
        tension: 0.4,
        fill: true,
        point_background_color: recent.iter().map(|m| mood_color(&m.mood_type)).collect(),
        point_border_color: "#fff",
        point_border_width: 2.0,
        point_radius: 6.0,
        point_hover_radius: 8.0,
    };

    Some(ChartConfig {
        kind: "line",
        data: ChartData {
            labels: recent.iter().map(|m| format_short_date(&m.timestamp)).collect(),
            datasets: vec![dataset],
        },
        options: ChartOptions::default(),
    })
}

// ============================================
// CHART INSTANCES
// ============================================

/// A canvas that hosts a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    /// Overview tab, fed by the dashboard snapshot
    Overview,
    /// Analytics tab, fed by `/api/mood`
    History,
}

impl ChartSlot {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::Overview => "overview-chart",
            ChartSlot::History => "mood-chart",
        }
    }
}

/// Identity of one drawn chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle {
    pub slot: ChartSlot,
    pub id: u64,
}

/// At most one live chart per canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSlots {
    overview: Option<ChartHandle>,
    history: Option<ChartHandle>,
    next_id: u64,
}

impl ChartSlots {
    /// Allocate a new chart for `slot`, returning it and the one it replaces
    pub fn install(&mut self, slot: ChartSlot) -> (ChartHandle, Option<ChartHandle>) {
        self.next_id += 1;
        let handle = ChartHandle {
            slot,
            id: self.next_id,
        };
        let previous = self.slot_mut(slot).replace(handle);
        (handle, previous)
    }

    pub fn current(&self, slot: ChartSlot) -> Option<ChartHandle> {
        match slot {
            ChartSlot::Overview => self.overview,
            ChartSlot::History => self.history,
        }
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartHandle> {
        match slot {
            ChartSlot::Overview => &mut self.overview,
            ChartSlot::History => &mut self.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Newest first, like the backend returns them: day 15 down to day 1
    fn moods(count: u8) -> Vec<MoodEntry> {
        (1..=count)
            .rev()
            .map(|day| MoodEntry {
                id: Some(day as i64),
                mood_type: if day % 2 == 0 { "happy" } else { "mystery" }.to_string(),
                intensity: (day % 10) + 1,
                notes: None,
                timestamp: format!("2024-03-{:02}T12:00:00", day),
            })
            .collect()
    }

    #[test]
    fn test_takes_ten_most_recent_in_chronological_order() {
        let input = moods(15);
        let config = mood_chart_config(&input).unwrap();

        let labels: Vec<&str> = config.labels().iter().map(String::as_str).collect();
        assert_eq!(
            labels,
            vec!["3/6", "3/7", "3/8", "3/9", "3/10", "3/11", "3/12", "3/13", "3/14", "3/15"]
        );

        let expected: Vec<u8> = (6..=15u8).map(|day| (day % 10) + 1).collect();
        assert_eq!(config.series().unwrap().data, expected);
    }

    #[test]
    fn test_point_colors_follow_mood() {
        let config = mood_chart_config(&moods(3)).unwrap();
        let colors = &config.series().unwrap().point_background_color;
        // days 1, 2, 3
        assert_eq!(colors, &vec!["#7F8C8D", "#FFD93D", "#7F8C8D"]);
    }

    #[test]
    fn test_fixed_styling_and_axis() {
        let config = mood_chart_config(&moods(2)).unwrap();
        let series = config.series().unwrap();
        assert_eq!(series.border_color, LINE_COLOR);
        assert_eq!(series.background_color, FILL_COLOR);
        assert!(series.fill);
        assert_eq!(config.options.scales.y.max, 10);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["data"]["datasets"][0]["pointRadius"], 6.0);
    }

    #[test]
    fn test_empty_input_yields_no_chart() {
        assert!(mood_chart_config(&[]).is_none());
    }

    #[test]
    fn test_install_returns_previous_handle() {
        let mut slots = ChartSlots::default();

        let (first, prev) = slots.install(ChartSlot::Overview);
        assert!(prev.is_none());

        let (second, prev) = slots.install(ChartSlot::Overview);
        assert_eq!(prev, Some(first));
        assert_ne!(first.id, second.id);
        assert_eq!(slots.current(ChartSlot::Overview), Some(second));
        assert!(slots.current(ChartSlot::History).is_none());
    }
}
