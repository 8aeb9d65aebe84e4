use chrono::{NaiveDate, NaiveTime};
use shiftboard::errors::AppError;
use shiftboard::utils::time::{
    Cell, combine_date_and_time_of_day, decode_spreadsheet_datetime, interval_duration_minutes,
    round_minutes_between,
};

mod common;
use common::dt;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn test_interval_crossing_midnight() {
    assert_eq!(interval_duration_minutes(t("23:50"), t("00:10")), 20);
}

#[test]
fn test_interval_same_start_and_end_is_zero() {
    assert_eq!(interval_duration_minutes(t("12:00"), t("12:00")), 0);
}

#[test]
fn test_interval_same_day() {
    assert_eq!(interval_duration_minutes(t("12:05"), t("12:50")), 45);
}

#[test]
fn test_round_minutes_between_rounds_half_up() {
    let start = dt("2025-03-10 12:00");
    assert_eq!(
        round_minutes_between(start, start + chrono::Duration::seconds(29 * 60 + 30)),
        30
    );
    assert_eq!(
        round_minutes_between(start, start + chrono::Duration::seconds(29 * 60 + 29)),
        29
    );
}

#[test]
fn test_decode_numeric_date_and_fraction() {
    // 45658 = 2025-01-01, 0.375 = 09:00
    let ts = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Number(0.375)).unwrap();
    assert_eq!(ts, dt("2025-01-01 09:00"));
}

#[test]
fn test_decode_unix_epoch_day() {
    let ts = decode_spreadsheet_datetime(&Cell::Number(25569.0), &Cell::Number(0.0)).unwrap();
    assert_eq!(ts, dt("1970-01-01 00:00"));
}

#[test]
fn test_decode_fraction_drops_leftover_seconds() {
    // 09:00:40 → 09:00
    let fraction = (9.0 * 3600.0 + 40.0) / 86400.0;
    let ts = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Number(fraction)).unwrap();
    assert_eq!(ts, dt("2025-01-01 09:00"));
}

#[test]
fn test_decode_fraction_rounds_seconds_first() {
    // 09:29:59.6 rounds to 09:30:00 before being split
    let fraction = (9.0 * 3600.0 + 29.0 * 60.0 + 59.6) / 86400.0;
    let ts = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Number(fraction)).unwrap();
    assert_eq!(ts, dt("2025-01-01 09:30"));
}

#[test]
fn test_decode_full_day_fraction_rolls_over() {
    let ts = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Number(1.0)).unwrap();
    assert_eq!(ts, dt("2025-01-02 00:00"));
}

#[test]
fn test_decode_text_date_and_time() {
    let ts = decode_spreadsheet_datetime(
        &Cell::Text("2025-03-10".into()),
        &Cell::Text("08:15".into()),
    )
    .unwrap();
    assert_eq!(ts, dt("2025-03-10 08:15"));

    let us = decode_spreadsheet_datetime(
        &Cell::Text("03/10/2025".into()),
        &Cell::Text("17:45".into()),
    )
    .unwrap();
    assert_eq!(us, dt("2025-03-10 17:45"));
}

#[test]
fn test_decode_text_time_with_seconds() {
    let ts = decode_spreadsheet_datetime(
        &Cell::Text("2025-03-10".into()),
        &Cell::Text("09:00:00".into()),
    )
    .unwrap();
    assert_eq!(ts, dt("2025-03-10 09:00"));

    // seconds are dropped, never rounded
    let late = decode_spreadsheet_datetime(
        &Cell::Text("2025-03-10".into()),
        &Cell::Text("17:45:59".into()),
    )
    .unwrap();
    assert_eq!(late, dt("2025-03-10 17:45"));
}

#[test]
fn test_decode_rejects_garbage() {
    let bad_date = decode_spreadsheet_datetime(&Cell::Text("soon".into()), &Cell::Number(0.5));
    assert!(matches!(bad_date, Err(AppError::InvalidDate(_))));

    let bad_time = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Text("noon".into()));
    assert!(matches!(bad_time, Err(AppError::InvalidTime(_))));

    let empty = decode_spreadsheet_datetime(&Cell::Number(45658.0), &Cell::Empty);
    assert!(matches!(empty, Err(AppError::InvalidTime(_))));
}

#[test]
fn test_cell_classification() {
    assert_eq!(Cell::from_raw(" 1.5 "), Cell::Number(1.5));
    assert_eq!(Cell::from_raw("09:00"), Cell::Text("09:00".into()));
    assert_eq!(Cell::from_raw("   "), Cell::Empty);
}

#[test]
fn test_combine_date_and_time_of_day() {
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    assert_eq!(
        combine_date_and_time_of_day(day, "21:05").unwrap(),
        dt("2025-03-10 21:05")
    );
    assert!(combine_date_and_time_of_day(day, "25:00").is_err());
}
