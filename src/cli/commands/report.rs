use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::core::workflow::WorkflowLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Report an outage for a luminaria.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        id,
        problem,
        date,
        time,
    } = cmd
    {
        //
        // 1. Parse optional date/time overrides
        //
        let d = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };
        let t = parse_optional_time(time.as_ref())?;

        //
        // 2. Open DB and check capability
        //
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::ReportProblem)?;

        //
        // 3. Execute logic
        //
        WorkflowLogic::report(&mut pool, id, problem, d, t, &cfg.operator)?;
    }

    Ok(())
}
