//! Operator table access. Role strings are validated at the edge and
//! converted to the closed [`Role`] enumeration immediately.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use rusqlite::{Connection, OptionalExtension, params};

pub fn add_user(conn: &Connection, name: &str, role: Role) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (name, role, created_at) VALUES (?1, ?2, datetime('now'))",
        params![name, role.to_db_str()],
    )?;
    Ok(())
}

pub fn delete_user(conn: &Connection, name: &str) -> AppResult<usize> {
    let rows = conn.execute("DELETE FROM users WHERE name = ?1", [name])?;
    Ok(rows)
}

pub fn set_role(conn: &Connection, name: &str, role: Role) -> AppResult<()> {
    let rows = conn.execute(
        "UPDATE users SET role = ?2 WHERE name = ?1",
        params![name, role.to_db_str()],
    )?;
    if rows == 0 {
        return Err(AppError::UnknownOperator(name.to_string()));
    }
    Ok(())
}

/// Role of a named operator, or an error if the operator does not exist.
pub fn role_of(pool: &mut DbPool, name: &str) -> AppResult<Role> {
    let role_str: Option<String> = pool
        .conn
        .query_row("SELECT role FROM users WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;

    match role_str {
        Some(s) => {
            Role::from_db_str(&s).ok_or_else(|| AppError::InvalidRole(s))
        }
        None => Err(AppError::UnknownOperator(name.to_string())),
    }
}

pub fn list_users(pool: &mut DbPool) -> AppResult<Vec<(String, Role)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT name, role FROM users ORDER BY name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (name, role_str) = r?;
        let role = Role::from_db_str(&role_str).ok_or_else(|| AppError::InvalidRole(role_str))?;
        out.push((name, role));
    }
    Ok(out)
}
