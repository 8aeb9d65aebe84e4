use shiftboard::core::ledger::BreakLedger;
use shiftboard::core::projector::{BASE_SHIFT_MINUTES, is_overworking, projected_end_time};

mod common;
use common::{dt, employee};

#[test]
fn test_base_duration_is_eleven_hours() {
    assert_eq!(BASE_SHIFT_MINUTES, 660);
}

#[test]
fn test_projection_before_and_after_a_break() {
    let mut emp = employee("Ada", "09:00", 60);
    assert_eq!(projected_end_time(&emp), dt("2025-03-10 20:00"));

    BreakLedger::start_break(&mut emp, dt("2025-03-10 12:00")).unwrap();
    BreakLedger::end_break(&mut emp, dt("2025-03-10 12:30")).unwrap();

    assert_eq!(emp.break_minutes_owed, 30);
    assert_eq!(projected_end_time(&emp), dt("2025-03-10 20:30"));
}

#[test]
fn test_open_break_does_not_move_projection() {
    let mut emp = employee("Ada", "09:00", 60);
    BreakLedger::start_break(&mut emp, dt("2025-03-10 12:00")).unwrap();
    assert_eq!(projected_end_time(&emp), dt("2025-03-10 20:00"));
}

#[test]
fn test_overworking_flags_projection_before_listed_end() {
    // listed end 21:00, projected 20:00
    let mut emp = employee("Ada", "09:00", 60);
    emp.end_shift = dt("2025-03-10 21:00");
    assert!(is_overworking(&emp));

    // listed end equals projection
    emp.end_shift = dt("2025-03-10 20:00");
    assert!(!is_overworking(&emp));

    // listed end before projection
    emp.end_shift = dt("2025-03-10 19:00");
    assert!(!is_overworking(&emp));
}
