use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::board_rows;
use crate::core::persist;
use crate::core::tick::on_tick;
use crate::errors::AppResult;
use crate::models::roster::Roster;
use crate::ui::board::{render_board, render_totals};
use crate::ui::messages::{header, info};
use crate::ui::timeline::{DEFAULT_WIDTH, Window, render_timeline};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List { timeline } = cmd {
        let pool = super::open_pool(cfg)?;
        let mut roster = persist::load(&pool)?;
        on_tick(&mut roster);

        print_board(&roster, cfg, now, *timeline);
    }
    Ok(())
}

/// Board (and optionally timeline) for the given roster.
pub(crate) fn print_board(roster: &Roster, cfg: &Config, now: NaiveDateTime, timeline: bool) {
    if roster.is_empty() {
        info("The board is empty. Import a roster with `shiftboard import <FILE>`.");
        return;
    }

    header(format!("Board at {}", now.format("%Y-%m-%d %H:%M")));

    let rows = board_rows(roster, now);
    print!("{}", render_board(&rows, cfg.separator()));
    println!("\n{}", render_totals(&rows));

    if timeline {
        let window = Window::new(cfg.timeline_start_hour, cfg.timeline_end_hour, DEFAULT_WIDTH);
        println!("\n{}", render_timeline(roster, now, &window));
    }
}
