use crate::core::persist;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};

pub struct ClearLogic;

impl ClearLogic {
    /// Drop the whole roster. Asks first unless `yes` is set.
    pub fn apply(pool: &DbPool, yes: bool) -> AppResult<bool> {
        let roster = persist::load(pool)?;

        if roster.is_empty() {
            info("Roster is already empty.");
            return Ok(false);
        }

        if !yes && !confirm(roster.len())? {
            info("Nothing cleared.");
            return Ok(false);
        }

        persist::clear(pool)?;
        ttlog(
            &pool.conn,
            "clear",
            "",
            &format!("Removed {} employees", roster.len()),
        )?;
        warning(format!("Cleared {} employees from the board.", roster.len()));
        Ok(true)
    }
}

fn confirm(count: usize) -> AppResult<bool> {
    print!("Are you sure you want to clear all saved data ({count} employees)? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
