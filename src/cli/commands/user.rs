use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::models::role::{Capability, Role};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

/// Manage operators: add, change role, delete, list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        role,
        set_role,
        del,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *list {
            access::require(&mut pool, &cfg.operator, Capability::View)?;

            let rows = users::list_users(&mut pool)?;
            if rows.is_empty() {
                info("No operators registered.");
                return Ok(());
            }

            let data: Vec<Vec<String>> = rows
                .iter()
                .map(|(name, r)| vec![name.clone(), r.to_db_str().to_string()])
                .collect();

            let table = Table::auto(&["Operator", "Role"], &data);
            println!("\n{}", table.render());
            return Ok(());
        }

        access::require(&mut pool, &cfg.operator, Capability::ManageUsers)?;

        if let Some(name) = add {
            let role_str = role.as_deref().unwrap_or("viewer");
            let r = Role::from_code(role_str)
                .ok_or_else(|| AppError::InvalidRole(role_str.to_string()))?;

            users::add_user(&pool.conn, name, r)?;
            oplog(
                &pool.conn,
                "user",
                name,
                &format!("Operator added with role {}", r.to_db_str()),
            )?;
            success(format!("Operator '{}' added with role {}.", name, r.to_db_str()));
            return Ok(());
        }

        if let Some(name) = set_role {
            let role_str = role
                .as_deref()
                .ok_or_else(|| AppError::Other("--set-role requires --role".to_string()))?;
            let r = Role::from_code(role_str)
                .ok_or_else(|| AppError::InvalidRole(role_str.to_string()))?;

            users::set_role(&pool.conn, name, r)?;
            oplog(
                &pool.conn,
                "user",
                name,
                &format!("Role changed to {}", r.to_db_str()),
            )?;
            success(format!("Operator '{}' now has role {}.", name, r.to_db_str()));
            return Ok(());
        }

        if let Some(name) = del {
            if name == &cfg.operator {
                return Err(AppError::Other(
                    "An operator cannot delete itself".to_string(),
                ));
            }

            let rows = users::delete_user(&pool.conn, name)?;
            if rows == 0 {
                return Err(AppError::UnknownOperator(name.clone()));
            }

            oplog(&pool.conn, "user", name, "Operator deleted")?;
            success(format!("Operator '{}' deleted.", name));
            return Ok(());
        }

        warning("Nothing to do: use --add, --set-role, --del or --list.");
    }

    Ok(())
}
