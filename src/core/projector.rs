use crate::core::ledger::BreakLedger;
use crate::models::employee::Employee;
use chrono::{Duration, NaiveDateTime};

/// Fixed shift length before breaks are added back (11h).
pub const BASE_SHIFT_MINUTES: i64 = 660;

/// Shift start + base duration + every break taken so far.
pub fn projected_end_time(emp: &Employee) -> NaiveDateTime {
    let breaks = BreakLedger::total_break_minutes(emp);
    emp.start_shift + Duration::minutes(BASE_SHIFT_MINUTES + breaks)
}

/// True when the projected end falls before the rostered end.
///
/// Display cue only. The inequality mirrors the board's historical
/// behaviour and is still pending product confirmation.
pub fn is_overworking(emp: &Employee) -> bool {
    projected_end_time(emp) < emp.end_shift
}
