//! Display order of the board.

use crate::models::employee::Employee;
use std::cmp::Ordering;

/// On break first, just back from a break last, otherwise by shift start.
pub fn compare_for_display(a: &Employee, b: &Employee) -> Ordering {
    match (a.on_break(), b.on_break()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match (a.just_had_break, b.just_had_break) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    a.start_shift.cmp(&b.start_shift)
}

/// Stable: equal employees keep their relative order.
pub fn sort_for_display(employees: &mut [Employee]) {
    employees.sort_by(compare_for_display);
}
