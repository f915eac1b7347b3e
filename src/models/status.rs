use serde::Serialize;

/// Lifecycle status of a monitored streetlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Reported,
    Confirmed,
    Fixed,
}

impl Status {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Reported => "reported",
            Status::Confirmed => "confirmed",
            Status::Fixed => "fixed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ok" => Some(Status::Ok),
            "reported" => Some(Status::Reported),
            "confirmed" => Some(Status::Confirmed),
            "fixed" => Some(Status::Fixed),
            _ => None,
        }
    }

    /// Helper: parse a CLI filter value (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Status::from_db_str(&code.to_lowercase())
    }

    /// Human-readable label for list output and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Reported => "Reported",
            Status::Confirmed => "Confirmed",
            Status::Fixed => "Fixed",
        }
    }

    pub fn has_open_problem(&self) -> bool {
        matches!(self, Status::Reported | Status::Confirmed)
    }
}
