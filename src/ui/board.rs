//! The board table: one row per employee, in display order.

use crate::core::board::BoardRow;
use crate::utils::colors::{color_for_status, colorize_optional, colorize_projected_end, paint};
use crate::utils::formatting::{minutes_tick, optional_minutes};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

const HEADERS: [&str; 9] = [
    "#",
    "Employee",
    "Status",
    "Owed",
    "Breaks",
    "Current",
    "Back at",
    "Est. end",
    "Shift",
];

pub fn render_board(rows: &[BoardRow], separator: char) -> String {
    let mut table = Table::new(HEADERS.iter().map(|h| Column::new(h)).collect(), separator);

    for r in rows {
        let color = color_for_status(r.status);
        let breaks = if r.breaks.is_empty() {
            colorize_optional("-")
        } else {
            r.breaks.join("\n")
        };

        table.add_row(vec![
            r.row.to_string(),
            paint(&r.name, color),
            paint(r.status.as_str(), color),
            minutes_tick(r.owed_minutes),
            breaks,
            colorize_optional(&optional_minutes(r.open_break_minutes)),
            colorize_optional(r.expected_return.as_deref().unwrap_or("-")),
            colorize_projected_end(&r.projected_end_str(), r.overworking),
            r.shift_window.clone(),
        ]);
    }

    table.render()
}

/// One-line totals under the board.
pub fn render_totals(rows: &[BoardRow]) -> String {
    let on_break = rows.iter().filter(|r| r.open_break_minutes.is_some()).count();
    let owed: i64 = rows.iter().map(|r| r.owed_minutes).sum();
    let taken: i64 = rows.iter().map(|r| r.total_break_minutes).sum();

    format!(
        "{} employees | {} on break | taken {} | still owed {}",
        rows.len(),
        on_break,
        mins2readable(taken, false, false),
        mins2readable(owed, false, false)
    )
}
