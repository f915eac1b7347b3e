use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Luminar
/// CLI application to track streetlight outages with SQLite
#[derive(Parser)]
#[command(
    name = "luminar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track municipal streetlight outages, field verification and downtime using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured operator name
    #[arg(global = true, long = "operator")]
    pub operator: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import waypoints from a KMZ (or KML) file
    Import {
        /// Path of the KMZ/KML file to import
        file: String,
    },

    /// Report an outage for a luminaria
    Report {
        /// Luminaria id (waypoint name)
        id: String,

        #[arg(long = "problem", help = "Description of the problem")]
        problem: String,

        /// Report date (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Report time (HH:MM:SS); defaults to now
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Brigade field verification of a reported outage
    Verify {
        /// Luminaria id (waypoint name)
        id: String,

        #[arg(long = "ok", conflicts_with = "confirm", help = "Light found working")]
        ok: bool,

        #[arg(long = "confirm", help = "Problem confirmed on site")]
        confirm: bool,

        #[arg(long = "notes", help = "Field notes")]
        notes: Option<String>,

        #[arg(long = "photo", help = "Path of a field photo to attach")]
        photo: Option<String>,
    },

    /// Mark a luminaria as repaired (computes downtime)
    Fix {
        /// Luminaria id (waypoint name)
        id: String,

        /// Fix date (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Fix time (HH:MM:SS); defaults to now
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// List luminarias
    List {
        /// Filter by status (ok, reported, confirmed, fixed)
        #[arg(long = "status")]
        status: Option<String>,

        /// Filter by report-date period (YYYY, YYYY-MM, YYYY-MM-DD, or ranges
        /// like YYYY-MM:YYYY-MM; "all" bypasses the filter)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Show the audit trail of a luminaria
    History {
        /// Luminaria id (waypoint name)
        id: String,
    },

    /// Delete a luminaria and its history
    Del {
        /// Luminaria id (waypoint name)
        id: String,
    },

    /// Export the luminaria status report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by report-date year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Manage operators and their roles
    User {
        #[arg(long = "add", value_name = "NAME", help = "Add a new operator")]
        add: Option<String>,

        #[arg(
            long = "role",
            value_name = "ROLE",
            help = "Role for --add / --set-role (admin, inspector, brigade, viewer)"
        )]
        role: Option<String>,

        #[arg(long = "set-role", value_name = "NAME", help = "Change an operator's role")]
        set_role: Option<String>,

        #[arg(long = "del", value_name = "NAME", help = "Delete an operator")]
        del: Option<String>,

        #[arg(long = "list", help = "List operators and their roles")]
        list: bool,
    },
}
