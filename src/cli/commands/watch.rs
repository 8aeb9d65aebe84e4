use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::persist;
use crate::core::tick::on_tick;
use crate::errors::AppResult;
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Single-threaded refresh loop: reload, tick, redraw, sleep.
///
/// Nothing is written back; a tick only recomputes derived values.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks, every } = &cli.command {
        let pool = super::open_pool(cfg)?;
        let interval = Duration::from_secs(every.unwrap_or(cfg.refresh_seconds).max(1));

        let mut done = 0u64;
        loop {
            let now = super::resolve_now(cli)?;
            let mut roster = persist::load(&pool)?;
            on_tick(&mut roster);

            if !cli.test {
                print!("{CLEAR_SCREEN}");
            }
            super::list::print_board(&roster, cfg, now, true);

            done += 1;
            if ticks.is_some_and(|max| done >= max) {
                break;
            }
            thread::sleep(interval);
        }
    }
    Ok(())
}
