// src/export/model.rs

use crate::core::board::BoardRow;
use serde::Serialize;

/// Flat board row for CSV / JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct BoardExport {
    pub row: usize,
    pub name: String,
    pub status: String,
    pub owed_minutes: i64,
    pub total_break_minutes: i64,
    pub breaks: String,
    pub open_break_minutes: Option<i64>,
    pub expected_return: Option<String>,
    pub projected_end: String,
    pub overworking: bool,
    pub shift_window: String,
}

impl From<&BoardRow> for BoardExport {
    fn from(r: &BoardRow) -> Self {
        Self {
            row: r.row,
            name: r.name.clone(),
            status: r.status.as_str().to_string(),
            owed_minutes: r.owed_minutes,
            total_break_minutes: r.total_break_minutes,
            breaks: r.breaks.join("; "),
            open_break_minutes: r.open_break_minutes,
            expected_return: r.expected_return.clone(),
            projected_end: r.projected_end.format("%Y-%m-%d %H:%M").to_string(),
            overworking: r.overworking,
            shift_window: r.shift_window.clone(),
        }
    }
}
