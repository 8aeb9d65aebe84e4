use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breaks::BreakLogic;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

/// `start`, `end` and `edit`.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let pool = super::open_pool(cfg)?;

    match cmd {
        Commands::Start { employee } => BreakLogic::start(&pool, employee, now),
        Commands::End { employee } => BreakLogic::end(&pool, employee, now),
        Commands::Edit {
            employee,
            break_no,
            start,
            end,
        } => BreakLogic::edit(&pool, employee, *break_no, start, end),
        _ => Ok(()),
    }
}
