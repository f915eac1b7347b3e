use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access;
use crate::db::pool::DbPool;
use crate::db::queries::list_luminarias;
use crate::errors::{AppError, AppResult};
use crate::models::role::Capability;
use crate::models::status::Status;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_optional_field, color_for_status};
use crate::utils::formatting::{bold, hours2readable, pad_right};

const HEADERS: [&str; 7] = [
    "ID",
    "Status",
    "Problem",
    "Reported",
    "Fixed",
    "Downtime",
    "Coordinates",
];

/// List luminarias, optionally filtered by status and report-date period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { status, period } = cmd {
        let status_filter = match status {
            Some(s) => {
                Some(Status::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        access::require(&mut pool, &cfg.operator, Capability::View)?;

        let lums = list_luminarias(&mut pool, status_filter, period.as_deref())?;

        if lums.is_empty() {
            info("No luminarias found.");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = lums
            .iter()
            .map(|l| {
                vec![
                    l.id.clone(),
                    l.status.label().to_string(),
                    l.problem.clone().unwrap_or_else(|| "--".to_string()),
                    join_instant(l.report_date.as_deref(), l.report_time.as_deref()),
                    join_instant(l.fix_date.as_deref(), l.fix_time.as_deref()),
                    hours2readable(l.downtime),
                    l.coordinates(),
                ]
            })
            .collect();

        let widths: Vec<usize> = HEADERS
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .map(|r| r[i].len())
                    .max()
                    .unwrap_or(0)
                    .max(h.len())
            })
            .collect();

        println!();
        let header_line: Vec<String> = HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, w)| bold(&pad_right(h, *w)))
            .collect();
        println!("{}", header_line.join("  "));

        for (lum, row) in lums.iter().zip(&rows) {
            let status_color = color_for_status(lum.status.to_db_str());
            let problem_color = color_for_optional_field(lum.problem.as_deref());
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| match i {
                    1 => format!("{}{}{}", status_color, pad_right(cell, *w), RESET),
                    2 => format!("{}{}{}", problem_color, pad_right(cell, *w), RESET),
                    _ => pad_right(cell, *w),
                })
                .collect();
            println!("{}", cells.join("  "));
        }

        println!("\n{} luminaria(s).", lums.len());
    }

    Ok(())
}

fn join_instant(date: Option<&str>, time: Option<&str>) -> String {
    match (date, time) {
        (Some(d), Some(t)) => format!("{} {}", d, t),
        (Some(d), None) => d.to_string(),
        _ => "--".to_string(),
    }
}
