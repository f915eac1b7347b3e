use super::status::Status;
use chrono::Local;
use serde::Serialize;

/// A monitored streetlight, identified by its waypoint id.
///
/// Date and time fields keep the storage formats ("YYYY-MM-DD", "HH:MM:SS")
/// so a record can round-trip through the downtime calculator unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Luminaria {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub status: Status,
    pub problem: Option<String>,
    pub report_date: Option<String>,
    pub report_time: Option<String>,
    pub fix_date: Option<String>,
    pub fix_time: Option<String>,
    pub brigade_notes: Option<String>,
    pub photo_path: Option<String>,
    pub downtime: Option<f64>,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Luminaria {
    /// Fresh waypoint as produced by the KMZ import: operational, no history.
    pub fn new(id: String, lat: f64, lng: f64, created_by: &str) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id,
            lat,
            lng,
            status: Status::Ok,
            problem: None,
            report_date: None,
            report_time: None,
            fix_date: None,
            fix_time: None,
            brigade_notes: None,
            photo_path: None,
            downtime: None,
            created_by: created_by.to_string(),
            updated_by: created_by.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn coordinates(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }
}
