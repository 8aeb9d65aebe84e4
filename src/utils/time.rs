//! Time utilities: spreadsheet date/time decoding, HH:MM parsing,
//! interval durations with midnight rollover, minute rounding.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Days between the spreadsheet serial epoch and 1970-01-01.
pub const SPREADSHEET_UNIX_OFFSET_DAYS: i64 = 25569;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A single spreadsheet cell as seen by the importer.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Classify a raw CSV field: numbers stay numbers, blanks are empty.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    /// Keep a raw field as text, whatever it looks like.
    pub fn text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

/// "HH:MM" or "HH:MM:SS"; seconds are dropped.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
        .and_then(|parsed| parsed.with_second(0))
}

pub fn format_time_of_day(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Truncate a timestamp to its wall-clock minute.
pub fn time_of_day(ts: &NaiveDateTime) -> NaiveTime {
    NaiveTime::from_hms_opt(ts.hour(), ts.minute(), 0).unwrap_or(NaiveTime::MIN)
}

/// Minutes from `start` to `end`; an `end` earlier than `start` belongs to
/// the next day.
pub fn interval_duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = if end < start {
        (end - start) + Duration::days(1)
    } else {
        end - start
    };
    round_millis_to_minutes(diff.num_milliseconds())
}

/// `round((to - from) / 60000)` with halves rounded up.
pub fn round_minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    round_millis_to_minutes((to - from).num_milliseconds())
}

fn round_millis_to_minutes(ms: i64) -> i64 {
    (ms + 30_000).div_euclid(60_000)
}

pub fn combine_date_and_time_of_day(reference: NaiveDate, hhmm: &str) -> AppResult<NaiveDateTime> {
    let t = parse_time(hhmm).ok_or_else(|| AppError::InvalidTime(hhmm.to_string()))?;
    Ok(reference.and_time(t))
}

/// Build a timestamp from a spreadsheet date cell and time cell.
///
/// Numeric dates are day counts from 1899-12-30, numeric times are
/// fractions of a day. Seconds are always zeroed.
pub fn decode_spreadsheet_datetime(date: &Cell, time: &Cell) -> AppResult<NaiveDateTime> {
    let day = decode_date(date)?;
    let (hours, minutes) = decode_time(time)?;

    let midnight = day.and_time(NaiveTime::MIN);
    // hours >= 24 roll into the following day
    Duration::try_hours(hours)
        .zip(Duration::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .and_then(|offset| midnight.checked_add_signed(offset))
        .ok_or_else(|| AppError::InvalidTime(time.as_text()))
}

fn decode_date(cell: &Cell) -> AppResult<NaiveDate> {
    match cell {
        Cell::Number(days) => {
            if !days.is_finite() {
                return Err(AppError::InvalidDate(days.to_string()));
            }
            let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
                .ok_or_else(|| AppError::InvalidDate("1970-01-01".into()))?;
            let offset = days.floor() as i64 - SPREADSHEET_UNIX_OFFSET_DAYS;
            Duration::try_days(offset)
                .and_then(|d| unix_epoch.checked_add_signed(d))
                .ok_or_else(|| AppError::InvalidDate(days.to_string()))
        }
        Cell::Text(s) => parse_date_text(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        Cell::Empty => Err(AppError::InvalidDate("<empty>".into())),
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    for fmt in date_formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let dt_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

fn decode_time(cell: &Cell) -> AppResult<(i64, i64)> {
    match cell {
        Cell::Number(fraction) => {
            if !fraction.is_finite() || *fraction < 0.0 {
                return Err(AppError::InvalidTime(fraction.to_string()));
            }
            let total_seconds = (fraction * SECONDS_PER_DAY).round() as i64;
            let hours = total_seconds / 3600;
            let minutes = (total_seconds % 3600) / 60;
            Ok((hours, minutes))
        }
        Cell::Text(s) => {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?;
            Ok((t.hour() as i64, t.minute() as i64))
        }
        Cell::Empty => Err(AppError::InvalidTime("<empty>".into())),
    }
}

/// Parse the `--now` override used to pin the clock.
pub fn parse_clock(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Serde helpers storing a `NaiveTime` as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid HH:MM '{raw}'")))
    }
}
