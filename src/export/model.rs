use crate::models::luminaria::Luminaria;
use crate::utils::formatting::hours2export;
use serde::Serialize;

/// Flat row for status-report exports, one per luminaria.
#[derive(Serialize, Clone, Debug)]
pub struct LuminariaExport {
    pub id: String,
    pub status: String,
    pub problem: String,
    pub report_date: String,
    pub report_time: String,
    pub fix_date: String,
    pub fix_time: String,
    pub downtime_hours: String,
    pub coordinates: String,
}

impl From<&Luminaria> for LuminariaExport {
    fn from(lum: &Luminaria) -> Self {
        Self {
            id: lum.id.clone(),
            status: lum.status.label().to_string(),
            problem: lum.problem.clone().unwrap_or_else(|| "N/A".to_string()),
            report_date: lum.report_date.clone().unwrap_or_else(|| "N/A".to_string()),
            report_time: lum.report_time.clone().unwrap_or_else(|| "N/A".to_string()),
            fix_date: lum.fix_date.clone().unwrap_or_else(|| "N/A".to_string()),
            fix_time: lum.fix_time.clone().unwrap_or_else(|| "N/A".to_string()),
            downtime_hours: hours2export(lum.downtime),
            coordinates: lum.coordinates(),
        }
    }
}

/// Header for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "status",
        "problem",
        "report_date",
        "report_time",
        "fix_date",
        "fix_time",
        "downtime_hours",
        "coordinates",
    ]
}

/// One export row as strings (for the PDF table).
pub(crate) fn row_to_cells(r: &LuminariaExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.status.clone(),
        r.problem.clone(),
        r.report_date.clone(),
        r.report_time.clone(),
        r.fix_date.clone(),
        r.fix_time.clone(),
        r.downtime_hours.clone(),
        r.coordinates.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[LuminariaExport]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}
