use crate::utils::time::{self, hhmm};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A completed break, wall-clock of day only.
///
/// `end < start` means the break crossed midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl BreakInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse both ends from "HH:MM" strings.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: time::parse_time(start)?,
            end: time::parse_time(end)?,
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        time::interval_duration_minutes(self.start, self.end)
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    /// "HH:MM - HH:MM"
    pub fn label(&self) -> String {
        format!("{} - {}", self.start_str(), self.end_str())
    }
}
