use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Capability;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::ImportWaypoints)?;
        ImportLogic::import(&mut pool, file, &cfg.operator)?;
    }
    Ok(())
}
