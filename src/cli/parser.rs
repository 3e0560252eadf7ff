use crate::core::period::ReportKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeTrack
/// CLI application to track employee attendance with SQLite
#[derive(Parser)]
#[command(
    name = "timetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee attendance CLI: clock actions, manual entries and payroll-style reports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
        migrate: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the employee roster
    Employee {
        #[command(subcommand)]
        action: EmployeeCmd,
    },

    /// Manage the shop registry
    Shop {
        #[command(subcommand)]
        action: ShopCmd,
    },

    /// Record a clock action for an employee
    Clock {
        /// Employee id
        employee: i64,

        /// Action: in, break-start, break-end, out
        action: String,
    },

    /// Record a manual time entry
    Add {
        /// Employee id
        employee: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: String,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM")]
        end: String,

        /// Break duration in minutes
        #[arg(long = "break", value_name = "MIN")]
        break_minutes: Option<i64>,
    },

    /// Delete a time entry by id
    Del {
        /// Entry id
        entry: i64,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Generate a work-hours report
    Report {
        #[arg(long, value_enum, default_value = "daily")]
        kind: ReportKind,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Restrict to one shop (0 = all shops)
        #[arg(long)]
        shop: Option<i64>,
    },

    /// Show the current-week overview across all shops
    Dashboard,

    /// Export a report (or raw entries) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "daily")]
        kind: ReportKind,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Restrict to one shop (0 = all shops)
        #[arg(long)]
        shop: Option<i64>,

        /// Export raw time entries instead of a report
        #[arg(long, short = 'e')]
        entries: bool,

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
}

#[derive(Subcommand)]
pub enum EmployeeCmd {
    /// Add an employee
    Add {
        name: String,

        /// Role: owner, manager or staff
        #[arg(long, default_value = "staff")]
        role: String,

        /// Shop the employee works at (0 = unassigned)
        #[arg(long, default_value_t = 0)]
        shop: i64,

        /// Grant owner-equivalent visibility across all shops
        #[arg(long = "full-access")]
        full_access: bool,
    },

    /// List employees with their presence status
    List,

    /// Delete an employee by id
    Del {
        id: i64,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ShopCmd {
    /// Add a shop
    Add {
        name: String,

        /// Managing employee id (0 = unassigned)
        #[arg(long, default_value_t = 0)]
        manager: i64,
    },

    /// List shops
    List,

    /// Delete a shop by id (its employees become unassigned)
    Del {
        id: i64,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
