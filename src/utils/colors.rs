//! ANSI color helper utilities for terminal output.

use crate::core::board::RowStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Row colour: cyan while on break, green once nothing is owed.
pub fn color_for_status(status: RowStatus) -> &'static str {
    match status {
        RowStatus::OnBreak => CYAN,
        RowStatus::Completed => GREEN,
        RowStatus::Pending => RESET,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Greys out placeholders ("-", "--:--", empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Projected end cell: yellow warning when the overrun flag is set.
pub fn colorize_projected_end(value: &str, overworking: bool) -> String {
    if overworking {
        format!("{YELLOW}{BOLD}{value}{RESET}")
    } else {
        value.to_string()
    }
}
