use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::workflow::WorkflowLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;

/// Brigade field verification: either refute (--ok) or confirm (--confirm).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Verify {
        id,
        ok,
        confirm,
        notes,
        photo,
    } = cmd
    {
        if !*ok && !*confirm {
            return Err(AppError::Other(
                "verify requires either --ok or --confirm".to_string(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::VerifyOnSite)?;

        WorkflowLogic::verify(
            &mut pool,
            id,
            *confirm,
            notes.as_deref(),
            photo.as_deref(),
            &cfg.operator,
        )?;
    }

    Ok(())
}
