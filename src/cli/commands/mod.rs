pub mod breaks;
pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod timeline;
pub mod watch;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_clock;
use chrono::{Local, NaiveDateTime, Timelike};

/// Open the configured database, creating the schema on first use.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::new(&cfg.database_path())
}

/// Wall-clock "now", or the pinned `--now` value.
pub fn resolve_now(cli: &Cli) -> AppResult<NaiveDateTime> {
    match &cli.now {
        Some(s) => parse_clock(s),
        None => {
            let now = Local::now().naive_local();
            Ok(now.with_nanosecond(0).unwrap_or(now))
        }
    }
}
