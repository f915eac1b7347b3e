use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::db::pool::DbPool;
use crate::db::queries::{load_history, luminaria_exists};
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::bold;

/// Print the audit trail of a luminaria, oldest entry first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::View)?;

        if !luminaria_exists(&pool.conn, id)? {
            return Err(AppError::LuminariaNotFound(id.clone()));
        }

        let entries = load_history(&mut pool, id)?;

        if entries.is_empty() {
            info(format!("No history for luminaria {}.", id));
            return Ok(());
        }

        println!("\n{}", bold(&format!("History of luminaria {}:", id)));
        for e in &entries {
            println!(
                "  {}{} {}{}  {}{:<10}{}  {}  {}({}){}",
                GREY, e.date, e.time, RESET, CYAN, e.action, RESET, e.details, GREY, e.user, RESET
            );
        }
        println!();
    }

    Ok(())
}
