//! Break ledger: opening, closing and editing breaks, and the owed balance.
//!
//! Closing a break decrements the live balance by the measured duration.
//! Editing a past break recomputes the balance from the planned requirement
//! minus the whole recorded history. The two can diverge after edits; both
//! behaviours are kept.

use crate::core::projector;
use crate::errors::{AppError, AppResult};
use crate::models::break_interval::BreakInterval;
use crate::models::employee::{Employee, OpenBreak};
use crate::utils::time;
use chrono::NaiveDateTime;

pub struct BreakLedger;

impl BreakLedger {
    pub fn start_break(emp: &mut Employee, now: NaiveDateTime) -> AppResult<()> {
        if emp.on_break() {
            return Err(AppError::State(format!("{} is already on break", emp.name)));
        }

        emp.open_break = Some(OpenBreak::starting_at(now));
        emp.just_had_break = false;
        Ok(())
    }

    /// Close the open break and return its measured length in minutes.
    pub fn end_break(emp: &mut Employee, now: NaiveDateTime) -> AppResult<i64> {
        let open = emp
            .open_break
            .ok_or_else(|| AppError::State(format!("{} is not on break", emp.name)))?;

        if now < open.started_at {
            return Err(AppError::State(format!(
                "{}'s break started at {}, cannot end it at {}",
                emp.name,
                open.started_at.format("%H:%M"),
                now.format("%H:%M")
            )));
        }

        emp.breaks.push(BreakInterval::new(
            time::time_of_day(&open.started_at),
            time::time_of_day(&now),
        ));

        let duration = time::round_minutes_between(open.started_at, now);
        emp.break_minutes_owed = (emp.break_minutes_owed - duration).max(0);

        emp.open_break = None;
        emp.just_had_break = true;

        Self::refresh_derived(emp);
        Ok(duration)
    }

    /// Replace break `index` (0-based) with `new_start`..`new_end`.
    ///
    /// All-or-nothing: on error the employee is untouched.
    pub fn edit_break_interval(
        emp: &mut Employee,
        index: usize,
        new_start: &str,
        new_end: &str,
    ) -> AppResult<()> {
        if index >= emp.breaks.len() {
            return Err(AppError::InvalidBreakIndex(index));
        }

        let edited = BreakInterval::parse(new_start, new_end).ok_or_else(|| {
            AppError::InvalidRange(format!("'{new_start}' - '{new_end}' is not HH:MM - HH:MM"))
        })?;

        if edited.duration_minutes() <= 0 {
            return Err(AppError::InvalidRange(format!(
                "{} must end after it starts",
                edited.label()
            )));
        }

        emp.breaks[index] = edited;

        let total = Self::total_break_minutes(emp);
        emp.break_minutes_owed = (emp.planned_break_minutes - total).max(0);

        Self::refresh_derived(emp);
        Ok(())
    }

    /// Sum of every recorded break; order independent.
    pub fn total_break_minutes(emp: &Employee) -> i64 {
        emp.breaks.iter().map(BreakInterval::duration_minutes).sum()
    }

    pub fn current_open_break_duration_minutes(started_at: NaiveDateTime, now: NaiveDateTime) -> i64 {
        time::round_minutes_between(started_at, now)
    }

    /// Recompute the cached total and projected end.
    pub fn refresh_derived(emp: &mut Employee) {
        emp.derived.total_break_minutes = Self::total_break_minutes(emp);
        emp.derived.calculated_end_time = Some(projector::projected_end_time(emp));
    }
}
