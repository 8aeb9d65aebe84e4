use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let pool = super::open_pool(cfg)?;
        ClearLogic::apply(&pool, *yes)?;
    }
    Ok(())
}
