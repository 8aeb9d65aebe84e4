//! Per-row values consumed by the table, the timeline and exports.

use crate::core::ledger::BreakLedger;
use crate::core::projector;
use crate::models::employee::Employee;
use crate::models::roster::Roster;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowStatus {
    OnBreak,
    Completed,
    Pending,
}

impl RowStatus {
    pub fn of(emp: &Employee) -> Self {
        if emp.on_break() {
            RowStatus::OnBreak
        } else if emp.break_minutes_owed == 0 {
            RowStatus::Completed
        } else {
            RowStatus::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::OnBreak => "on break",
            RowStatus::Completed => "completed",
            RowStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardRow {
    pub row: usize,
    pub name: String,
    pub owed_minutes: i64,
    pub total_break_minutes: i64,
    pub breaks: Vec<String>,
    pub open_break_minutes: Option<i64>,
    pub expected_return: Option<String>,
    pub projected_end: NaiveDateTime,
    pub overworking: bool,
    pub shift_window: String,
    pub status: RowStatus,
}

impl BoardRow {
    pub fn build(row: usize, emp: &Employee, now: NaiveDateTime) -> Self {
        let projected_end = emp
            .derived
            .calculated_end_time
            .unwrap_or_else(|| projector::projected_end_time(emp));

        Self {
            row,
            name: emp.name.clone(),
            owed_minutes: emp.break_minutes_owed,
            total_break_minutes: BreakLedger::total_break_minutes(emp),
            breaks: emp.breaks.iter().map(|b| b.label()).collect(),
            open_break_minutes: emp
                .break_start_time()
                .map(|start| BreakLedger::current_open_break_duration_minutes(start, now)),
            expected_return: emp
                .expected_return()
                .map(|t| t.format("%H:%M").to_string()),
            projected_end,
            overworking: projector::is_overworking(emp),
            shift_window: emp.shift_window(),
            status: RowStatus::of(emp),
        }
    }

    pub fn projected_end_str(&self) -> String {
        self.projected_end.format("%H:%M").to_string()
    }
}

/// Rows in the roster's current order, numbered from 1.
pub fn board_rows(roster: &Roster, now: NaiveDateTime) -> Vec<BoardRow> {
    roster
        .employees()
        .iter()
        .enumerate()
        .map(|(i, emp)| BoardRow::build(i + 1, emp, now))
        .collect()
}
