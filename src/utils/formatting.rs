//! Formatting utilities used for CLI and export outputs.

/// Minutes as `02h 25m`, or `02:25` when `short`.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Owed balance as shown on the board: `30'`.
pub fn minutes_tick(mins: i64) -> String {
    format!("{mins}'")
}

/// `Some(n)` → "n min", `None` → "-".
pub fn optional_minutes(mins: Option<i64>) -> String {
    match mins {
        Some(m) => format!("{m} min"),
        None => "-".to_string(),
    }
}
