use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::history::HistoryEntry;
use crate::models::luminaria::Luminaria;
use crate::models::status::Status;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Luminaria> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Luminaria {
        id: row.get("id")?,
        lat: row.get("lat")?,
        lng: row.get("lng")?,
        status,
        problem: row.get("problem")?,
        report_date: row.get("report_date")?,
        report_time: row.get("report_time")?,
        fix_date: row.get("fix_date")?,
        fix_time: row.get("fix_time")?,
        brigade_notes: row.get("brigade_notes")?,
        photo_path: row.get("photo_path")?,
        downtime: row.get("downtime")?,
        created_by: row.get("created_by")?,
        updated_by: row.get("updated_by")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn insert_luminaria(conn: &Connection, lum: &Luminaria) -> AppResult<()> {
    conn.execute(
        "INSERT INTO luminarias
         (id, lat, lng, status, problem, report_date, report_time, fix_date, fix_time,
          brigade_notes, photo_path, downtime, created_by, updated_by, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        params![
            lum.id,
            lum.lat,
            lum.lng,
            lum.status.to_db_str(),
            lum.problem,
            lum.report_date,
            lum.report_time,
            lum.fix_date,
            lum.fix_time,
            lum.brigade_notes,
            lum.photo_path,
            lum.downtime,
            lum.created_by,
            lum.updated_by,
            lum.created_at,
            lum.updated_at,
        ],
    )?;
    Ok(())
}

/// Persist every mutable field of a record back to its row.
pub fn update_luminaria(conn: &Connection, lum: &Luminaria) -> AppResult<()> {
    let rows = conn.execute(
        "UPDATE luminarias SET
            status = ?2, problem = ?3, report_date = ?4, report_time = ?5,
            fix_date = ?6, fix_time = ?7, brigade_notes = ?8, photo_path = ?9,
            downtime = ?10, updated_by = ?11, updated_at = ?12
         WHERE id = ?1",
        params![
            lum.id,
            lum.status.to_db_str(),
            lum.problem,
            lum.report_date,
            lum.report_time,
            lum.fix_date,
            lum.fix_time,
            lum.brigade_notes,
            lum.photo_path,
            lum.downtime,
            lum.updated_by,
            lum.updated_at,
        ],
    )?;

    if rows == 0 {
        return Err(AppError::LuminariaNotFound(lum.id.clone()));
    }
    Ok(())
}

pub fn get_luminaria(pool: &mut DbPool, id: &str) -> AppResult<Option<Luminaria>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT * FROM luminarias WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn luminaria_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM luminarias WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

pub fn delete_luminaria(conn: &Connection, id: &str) -> AppResult<usize> {
    conn.execute("DELETE FROM history WHERE luminaria_id = ?1", [id])?;
    let rows = conn.execute("DELETE FROM luminarias WHERE id = ?1", [id])?;
    Ok(rows)
}

/// List records, optionally filtered by status and by a report-date period.
///
/// The period accepts the same shapes as `list --period`:
/// YYYY, YYYY-MM, YYYY-MM-DD and `start:end` ranges of equal precision.
pub fn list_luminarias(
    pool: &mut DbPool,
    status: Option<Status>,
    period: Option<&str>,
) -> AppResult<Vec<Luminaria>> {
    let mut query = "SELECT * FROM luminarias".to_string();
    let mut conditions: Vec<String> = Vec::new();
    let mut owned_params: Vec<String> = Vec::new();

    if let Some(s) = status {
        conditions.push("status = ?".to_string());
        owned_params.push(s.to_db_str().to_string());
    }

    if let Some(p) = period
        && !p.eq_ignore_ascii_case("all")
    {
        push_period_conditions(p, &mut conditions, &mut owned_params)?;
    }

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }

    query.push_str(" ORDER BY id ASC");

    let mut stmt = pool.conn.prepare_cached(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> =
        owned_params.iter().map(|s| s as &dyn rusqlite::ToSql).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Translate a period expression into SQL conditions over `report_date`.
fn push_period_conditions(
    p: &str,
    conditions: &mut Vec<String>,
    params: &mut Vec<String>,
) -> AppResult<()> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.is_empty() || end.is_empty() || start.len() != end.len() {
            return Err(AppError::InvalidDate(p.to_string()));
        }

        let expr = match start.len() {
            4 => "strftime('%Y', report_date)",
            7 => "strftime('%Y-%m', report_date)",
            10 => "report_date",
            _ => return Err(AppError::InvalidDate(p.to_string())),
        };

        conditions.push(format!("{} >= ?", expr));
        conditions.push(format!("{} <= ?", expr));
        params.push(start.to_string());
        params.push(end.to_string());
        return Ok(());
    }

    let expr = match p.len() {
        4 => "strftime('%Y', report_date)",
        7 => "strftime('%Y-%m', report_date)",
        10 => "report_date",
        _ => return Err(AppError::InvalidDate(p.to_string())),
    };

    conditions.push(format!("{} = ?", expr));
    params.push(p.to_string());
    Ok(())
}

pub fn insert_history(conn: &Connection, entry: &HistoryEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO history (luminaria_id, date, time, action, details, user, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.luminaria_id,
            entry.date,
            entry.time,
            entry.action,
            entry.details,
            entry.user,
            entry.created_at,
        ],
    )?;
    Ok(())
}

pub fn load_history(pool: &mut DbPool, luminaria_id: &str) -> AppResult<Vec<HistoryEntry>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, luminaria_id, date, time, action, details, user, created_at
         FROM history
         WHERE luminaria_id = ?1
         ORDER BY created_at ASC",
    )?;

    let rows = stmt.query_map([luminaria_id], |row| {
        Ok(HistoryEntry {
            id: row.get(0)?,
            luminaria_id: row.get(1)?,
            date: row.get(2)?,
            time: row.get(3)?,
            action: row.get(4)?,
            details: row.get(5)?,
            user: row.get(6)?,
            created_at: row.get(7)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
