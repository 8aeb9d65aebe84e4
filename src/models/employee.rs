use super::break_interval::BreakInterval;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Minutes between the start of a break and the expected return.
pub const EXPECTED_BREAK_MINUTES: i64 = 30;

/// A break that has been started and not yet ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBreak {
    pub started_at: NaiveDateTime,
    pub expected_return: NaiveDateTime,
}

impl OpenBreak {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            started_at: now,
            expected_return: now + Duration::minutes(EXPECTED_BREAK_MINUTES),
        }
    }
}

/// Values recomputed from the ledger, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub total_break_minutes: i64,
    pub calculated_end_time: Option<NaiveDateTime>,
}

/// One roster row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub start_shift: NaiveDateTime,
    pub end_shift: NaiveDateTime,
    pub planned_break_minutes: i64,
    pub break_minutes_owed: i64,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    #[serde(default)]
    pub open_break: Option<OpenBreak>,
    #[serde(default)]
    pub just_had_break: bool,

    #[serde(skip)]
    pub derived: DerivedFields,
}

impl Employee {
    /// Fresh roster entry: nothing taken yet, the whole plan is owed.
    pub fn new(
        name: impl Into<String>,
        start_shift: NaiveDateTime,
        end_shift: NaiveDateTime,
        planned_break_minutes: i64,
    ) -> Self {
        Self {
            name: name.into(),
            start_shift,
            end_shift,
            planned_break_minutes,
            break_minutes_owed: planned_break_minutes,
            breaks: Vec::new(),
            open_break: None,
            just_had_break: false,
            derived: DerivedFields::default(),
        }
    }

    pub fn on_break(&self) -> bool {
        self.open_break.is_some()
    }

    pub fn break_start_time(&self) -> Option<NaiveDateTime> {
        self.open_break.map(|b| b.started_at)
    }

    pub fn expected_return(&self) -> Option<NaiveDateTime> {
        self.open_break.map(|b| b.expected_return)
    }

    /// "HH:MM - HH:MM" of the rostered shift.
    pub fn shift_window(&self) -> String {
        format!(
            "{} - {}",
            self.start_shift.format("%H:%M"),
            self.end_shift.format("%H:%M")
        )
    }
}
