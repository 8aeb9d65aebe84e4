//! shiftboard library root.
//! Exposes the break ledger, the schedule projector, the roster model and
//! the CLI front end built on top of them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::resolve_now;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::List { .. } => {
            cli::commands::list::handle(&cli.command, cfg, resolve_now(cli)?)
        }
        Commands::Start { .. } | Commands::End { .. } | Commands::Edit { .. } => {
            cli::commands::breaks::handle(&cli.command, cfg, resolve_now(cli)?)
        }
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Timeline { .. } => {
            cli::commands::timeline::handle(&cli.command, cfg, resolve_now(cli)?)
        }
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => {
            cli::commands::export::handle(&cli.command, cfg, resolve_now(cli)?)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
