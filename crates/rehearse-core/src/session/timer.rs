//! Call-length windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How long the prospect has agreed to stay on the call.
///
/// Parsed from the scenario labels `<5`, `5-10` and `10-15`. Any other label
/// falls back to a ten-minute cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeWindow {
    UnderFive,
    FiveToTen,
    TenToFifteen,
    Other(String),
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::FiveToTen
    }
}

impl TimeWindow {
    pub fn label(&self) -> &str {
        match self {
            TimeWindow::UnderFive => "<5",
            TimeWindow::FiveToTen => "5-10",
            TimeWindow::TenToFifteen => "10-15",
            TimeWindow::Other(label) => label,
        }
    }

    pub fn limit_minutes(&self) -> i64 {
        match self {
            TimeWindow::UnderFive => 5,
            TimeWindow::FiveToTen => 10,
            TimeWindow::TenToFifteen => 15,
            TimeWindow::Other(_) => 10,
        }
    }

    /// Whether the window has elapsed between `started_at` and `now`.
    pub fn is_expired(&self, started_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let elapsed_ms = (now - started_at).num_milliseconds();
        elapsed_ms >= self.limit_minutes() * 60_000
    }
}

impl From<&str> for TimeWindow {
    fn from(label: &str) -> Self {
        match label.trim() {
            "<5" => TimeWindow::UnderFive,
            "5-10" => TimeWindow::FiveToTen,
            "10-15" => TimeWindow::TenToFifteen,
            other => TimeWindow::Other(other.to_string()),
        }
    }
}

impl From<String> for TimeWindow {
    fn from(label: String) -> Self {
        TimeWindow::from(label.as_str())
    }
}

impl From<TimeWindow> for String {
    fn from(window: TimeWindow) -> Self {
        window.label().to_string()
    }
}
