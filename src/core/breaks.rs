//! Break toggling and editing against the persisted roster.

use crate::core::ledger::BreakLedger;
use crate::core::persist;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::roster::Roster;
use crate::ui::messages::{info, success};
use crate::utils::time::format_time_of_day;
use chrono::NaiveDateTime;

pub struct BreakLogic;

/// Re-sort and store after a mutation.
fn commit(pool: &DbPool, roster: &mut Roster) -> AppResult<()> {
    roster.refresh_derived();
    roster.sort_for_display();
    persist::save(pool, roster)
}

impl BreakLogic {
    pub fn start(pool: &DbPool, key: &str, now: NaiveDateTime) -> AppResult<()> {
        let mut roster = persist::load(pool)?;
        let emp = roster.resolve_mut(key)?;

        BreakLedger::start_break(emp, now)?;

        let name = emp.name.clone();
        let back = emp
            .expected_return()
            .map(|t| format_time_of_day(&t))
            .unwrap_or_default();

        commit(pool, &mut roster)?;

        let msg = format!("Break started at {}, expected back {}", format_time_of_day(&now), back);
        ttlog(&pool.conn, "start_break", &name, &msg)?;
        success(format!("{name}: {msg}"));
        Ok(())
    }

    pub fn end(pool: &DbPool, key: &str, now: NaiveDateTime) -> AppResult<()> {
        let mut roster = persist::load(pool)?;
        let emp = roster.resolve_mut(key)?;

        let minutes = BreakLedger::end_break(emp, now)?;

        let name = emp.name.clone();
        let owed = emp.break_minutes_owed;

        commit(pool, &mut roster)?;

        let msg = format!("Break ended at {} after {minutes} min, {owed} min still owed", format_time_of_day(&now));
        ttlog(&pool.conn, "end_break", &name, &msg)?;
        success(format!("{name}: {msg}"));
        Ok(())
    }

    /// `break_no` is 1-based, as shown on the board.
    pub fn edit(
        pool: &DbPool,
        key: &str,
        break_no: usize,
        new_start: &str,
        new_end: &str,
    ) -> AppResult<()> {
        let mut roster = persist::load(pool)?;
        let emp = roster.resolve_mut(key)?;

        let index = break_no
            .checked_sub(1)
            .ok_or(AppError::InvalidBreakIndex(break_no))?;
        let before = emp
            .breaks
            .get(index)
            .map(|b| b.label())
            .ok_or(AppError::InvalidBreakIndex(break_no))?;

        BreakLedger::edit_break_interval(emp, index, new_start, new_end)?;

        let name = emp.name.clone();
        let after = emp.breaks[index].label();
        let owed = emp.break_minutes_owed;

        commit(pool, &mut roster)?;

        let msg = format!("Break {break_no}: {before} → {after}, {owed} min still owed");
        ttlog(&pool.conn, "edit_break", &name, &msg)?;
        info(format!("{name}: {msg}"));
        Ok(())
    }
}
