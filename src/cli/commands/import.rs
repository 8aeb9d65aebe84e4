use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let pool = super::open_pool(cfg)?;
        ImportLogic::apply(&pool, &expand_tilde(file))?;
    }
    Ok(())
}
