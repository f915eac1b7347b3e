//! Roles and the capability predicate.
//!
//! The access-control policy lives entirely in [`Role::allows`], a pure
//! predicate over closed enumerations, so it can be unit-tested without any
//! database or terminal in the way.

use serde::Serialize;

/// Closed enumeration of operator roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Inspector,
    Brigade,
    Viewer,
}

/// Things an operator may be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ImportWaypoints,
    ReportProblem,
    VerifyOnSite,
    MarkFixed,
    ExportReports,
    ManageUsers,
    DeleteRecords,
    BackupDatabase,
    View,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Inspector => "inspector",
            Role::Brigade => "brigade",
            Role::Viewer => "viewer",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "inspector" => Some(Role::Inspector),
            "brigade" => Some(Role::Brigade),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    /// Helper: parse a CLI role argument (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Role::from_db_str(&code.to_lowercase())
    }

    /// The capability predicate: does this role allow the given action?
    pub fn allows(&self, cap: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Admin => true,
            Role::Inspector => matches!(cap, ImportWaypoints | ReportProblem | ExportReports | View),
            Role::Brigade => matches!(cap, VerifyOnSite | View),
            Role::Viewer => matches!(cap, View),
        }
    }
}

impl Capability {
    /// Phrase used in "operator is not allowed to ..." error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Capability::ImportWaypoints => "import waypoints",
            Capability::ReportProblem => "report problems",
            Capability::VerifyOnSite => "verify on site",
            Capability::MarkFixed => "mark lights as fixed",
            Capability::ExportReports => "export reports",
            Capability::ManageUsers => "manage users",
            Capability::DeleteRecords => "delete records",
            Capability::BackupDatabase => "back up the database",
            Capability::View => "view records",
        }
    }
}
