use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::LuminariaExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;

use crate::db::queries::map_row;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use rusqlite::params;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the luminaria status report.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// A range filters on the report date.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, date_bounds)?;

        if rows.is_empty() {
            warning("⚠️  No luminarias found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&rows, path, &title)?
            }
        }

        Ok(())
    }
}

/// Build the PDF title according to the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period else {
        return "Luminaria status report".to_string();
    };

    match p.len() {
        4 => {
            // YYYY
            format!("Luminaria status report for year {}", p)
        }

        7 => {
            // YYYY-MM
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                let month = crate::utils::date::month_name(parts[1]);
                format!("Luminaria status report for {} {}", month, parts[0])
            } else {
                "Luminaria status report".to_string()
            }
        }

        10 => {
            // YYYY-MM-DD
            format!("Luminaria status report for {}", p)
        }

        21 => {
            // YYYY-MM-DD:YYYY-MM-DD
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                format!("Luminaria status report from {} to {}", parts[0], parts[1])
            } else {
                "Luminaria status report".to_string()
            }
        }

        _ => "Luminaria status report".to_string(),
    }
}

/// Load records from the DB, flattened for export.
fn load_rows(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<LuminariaExport>> {
    let conn = &mut pool.conn;

    let mut rows_out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare("SELECT * FROM luminarias ORDER BY id ASC")?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                rows_out.push(LuminariaExport::from(&r?));
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT * FROM luminarias
                 WHERE report_date IS NOT NULL AND report_date BETWEEN ?1 AND ?2
                 ORDER BY id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;

            for r in rows {
                rows_out.push(LuminariaExport::from(&r?));
            }
        }
    }

    Ok(rows_out)
}
