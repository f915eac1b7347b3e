use chrono::Local;
use serde::Serialize;

/// One entry of the audit trail attached to a luminaria.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i32,
    pub luminaria_id: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM:SS
    pub action: String,
    pub details: String,
    pub user: String,
    pub created_at: String,
}

impl HistoryEntry {
    pub fn now(luminaria_id: &str, action: &str, details: &str, user: &str) -> Self {
        let now = Local::now();
        Self {
            id: 0,
            luminaria_id: luminaria_id.to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            action: action.to_string(),
            details: details.to_string(),
            user: user.to_string(),
            created_at: now.to_rfc3339(),
        }
    }
}
