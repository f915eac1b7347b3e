use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::models::role::Capability;

/// Export the luminaria status report in the requested format.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::ExportReports)?;

        ExportLogic::export(&mut pool, format, file, range, *force)?;
    }

    Ok(())
}
