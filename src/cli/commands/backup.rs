use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Capability;

/// Create a backup copy of the database, optionally compressed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::BackupDatabase)?;

        BackupLogic::backup(&mut pool, cfg, file, *compress)?;
    }

    Ok(())
}
