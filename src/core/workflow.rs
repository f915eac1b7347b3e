//! Outage workflow: report → verify → fix.
//!
//! Status lifecycle mirrors the field process: an inspector reports a
//! problem, the brigade confirms (or refutes) it on site, and an admin marks
//! the repair once done. Every transition appends a history entry, and the
//! fix transition runs the downtime calculator and stores the hour figure on
//! the record.

use crate::core::downtime::{compute_downtime, parse_instant};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_luminaria, insert_history, update_luminaria};
use crate::errors::{AppError, AppResult};
use crate::models::history::HistoryEntry;
use crate::models::luminaria::Luminaria;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::utils::date::today;
use chrono::{Local, NaiveDate, NaiveTime};

pub struct WorkflowLogic;

impl WorkflowLogic {
    /// Report an outage. Valid from `ok` (including re-reports after a fix).
    pub fn report(
        pool: &mut DbPool,
        id: &str,
        problem: &str,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        operator: &str,
    ) -> AppResult<()> {
        let mut lum = load(pool, id)?;

        if lum.status.has_open_problem() {
            return Err(AppError::Workflow(format!(
                "Luminaria {} already has an open report ({})",
                id,
                lum.status.to_db_str()
            )));
        }

        let report_date = date.unwrap_or_else(today);
        let report_time = time.unwrap_or_else(|| Local::now().time());

        lum.status = Status::Reported;
        lum.problem = Some(problem.to_string());
        lum.report_date = Some(report_date.format("%Y-%m-%d").to_string());
        lum.report_time = Some(report_time.format("%H:%M:%S").to_string());
        lum.fix_date = None;
        lum.fix_time = None;
        lum.downtime = None;
        lum.brigade_notes = None;
        lum.photo_path = None;
        touch(&mut lum, operator);

        update_luminaria(&pool.conn, &lum)?;
        insert_history(
            &pool.conn,
            &HistoryEntry::now(id, "report", &format!("Problem reported: {}", problem), operator),
        )?;
        oplog(&pool.conn, "report", id, problem)?;

        success(format!("Problem reported for luminaria {}.", id));
        Ok(())
    }

    /// Brigade field verification of a reported outage.
    ///
    /// `confirm == true` upholds the report (status `confirmed`);
    /// `confirm == false` refutes it and the light goes back to `ok`.
    pub fn verify(
        pool: &mut DbPool,
        id: &str,
        confirm: bool,
        notes: Option<&str>,
        photo: Option<&str>,
        operator: &str,
    ) -> AppResult<()> {
        let mut lum = load(pool, id)?;

        if lum.status != Status::Reported {
            return Err(AppError::Workflow(format!(
                "Luminaria {} is not awaiting verification (status: {})",
                id,
                lum.status.to_db_str()
            )));
        }

        lum.status = if confirm { Status::Confirmed } else { Status::Ok };
        lum.brigade_notes = notes.map(|s| s.to_string());
        lum.photo_path = photo.map(|s| s.to_string());
        touch(&mut lum, operator);

        let (action, details) = if confirm {
            (
                "confirm",
                format!(
                    "Problem confirmed on site{}",
                    notes.map(|n| format!(": {}", n)).unwrap_or_default()
                ),
            )
        } else {
            ("verify_ok", "Light verified as working".to_string())
        };

        update_luminaria(&pool.conn, &lum)?;
        insert_history(&pool.conn, &HistoryEntry::now(id, action, &details, operator))?;
        oplog(&pool.conn, "verify", id, &details)?;

        success(if confirm {
            format!("Problem confirmed for luminaria {}.", id)
        } else {
            format!("Luminaria {} verified as working.", id)
        });
        Ok(())
    }

    /// Mark a light repaired, computing downtime from report to fix.
    /// Returns the stored hour figure.
    pub fn fix(
        pool: &mut DbPool,
        id: &str,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        operator: &str,
    ) -> AppResult<f64> {
        let mut lum = load(pool, id)?;

        if !lum.status.has_open_problem() {
            return Err(AppError::Workflow(format!(
                "Luminaria {} has no open report to fix (status: {})",
                id,
                lum.status.to_db_str()
            )));
        }

        let report_date = lum.report_date.clone().ok_or_else(|| {
            AppError::Workflow(format!("Luminaria {} has no report date", id))
        })?;
        let report_time = lum.report_time.clone().ok_or_else(|| {
            AppError::Workflow(format!("Luminaria {} has no report time", id))
        })?;

        let fix_date = date.unwrap_or_else(today).format("%Y-%m-%d").to_string();
        let fix_time = time
            .unwrap_or_else(|| Local::now().time())
            .format("%H:%M:%S")
            .to_string();

        // Caller contract of the calculator: fix instant >= report instant.
        let report_instant = parse_instant(&report_date, &report_time)?;
        let fix_instant = parse_instant(&fix_date, &fix_time)?;
        if fix_instant < report_instant {
            return Err(AppError::Workflow(format!(
                "Fix instant {} {} is before the report instant {} {}",
                fix_date, fix_time, report_date, report_time
            )));
        }

        let downtime = compute_downtime(&report_date, &report_time, &fix_date, &fix_time)?;

        lum.status = Status::Ok;
        lum.fix_date = Some(fix_date);
        lum.fix_time = Some(fix_time);
        lum.downtime = Some(downtime);
        touch(&mut lum, operator);

        update_luminaria(&pool.conn, &lum)?;
        insert_history(
            &pool.conn,
            &HistoryEntry::now(
                id,
                "fix",
                &format!("Repaired; downtime {:.2} h", downtime),
                operator,
            ),
        )?;
        oplog(
            &pool.conn,
            "fix",
            id,
            &format!("Repaired with {:.2} h of downtime", downtime),
        )?;

        success(format!(
            "Luminaria {} marked as repaired ({:.2} h of downtime).",
            id, downtime
        ));
        Ok(downtime)
    }
}

fn load(pool: &mut DbPool, id: &str) -> AppResult<Luminaria> {
    get_luminaria(pool, id)?.ok_or_else(|| AppError::LuminariaNotFound(id.to_string()))
}

fn touch(lum: &mut Luminaria, operator: &str) {
    lum.updated_by = operator.to_string();
    lum.updated_at = Local::now().to_rfc3339();
}
