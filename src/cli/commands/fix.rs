use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::workflow::WorkflowLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Mark a luminaria as repaired, computing and storing its downtime.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fix { id, date, time } = cmd {
        let d = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };
        let t = parse_optional_time(time.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::MarkFixed)?;

        WorkflowLogic::fix(&mut pool, id, d, t, &cfg.operator)?;
    }

    Ok(())
}
