use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_luminaria, luminaria_exists};
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;
use crate::ui::messages::success;
use std::io::{Write, stdin, stdout};

/// Delete a luminaria and its whole history after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::DeleteRecords)?;

        if !luminaria_exists(&pool.conn, id)? {
            return Err(AppError::LuminariaNotFound(id.clone()));
        }

        println!(
            "⚠️  This will delete luminaria '{}' and its history.\nDo you want to continue? [y/N]: ",
            id
        );

        let mut answer = String::new();
        print!("> ");
        stdout().flush().ok();
        stdin().read_line(&mut answer)?;

        let answer = answer.trim().to_lowercase();
        if !(answer == "y" || answer == "yes") {
            println!("❌ Deletion cancelled by user.");
            return Ok(());
        }

        delete_luminaria(&pool.conn, id)?;
        oplog(&pool.conn, "del", id, "Luminaria deleted")?;

        success(format!("Luminaria {} deleted.", id));
    }

    Ok(())
}
