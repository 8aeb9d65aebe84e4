use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::persist;
use crate::core::tick::on_tick;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::timeline::{DEFAULT_WIDTH, Window, render_timeline};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Timeline { width } = cmd {
        let pool = super::open_pool(cfg)?;
        let mut roster = persist::load(&pool)?;

        if roster.is_empty() {
            info("The board is empty.");
            return Ok(());
        }

        on_tick(&mut roster);

        let window = Window::new(
            cfg.timeline_start_hour,
            cfg.timeline_end_hour,
            width.unwrap_or(DEFAULT_WIDTH),
        );
        print!("{}", render_timeline(&roster, now, &window));
    }
    Ok(())
}
