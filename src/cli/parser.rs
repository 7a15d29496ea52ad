use crate::export::{ExportFormat, ReportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for caretally
/// CLI application to analyze care-class attendance spreadsheets
#[derive(Parser)]
#[command(
    name = "caretally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze care-class attendance CSVs: care time, screening flags, and occupancy",
    long_about = None
)]
pub struct Cli {
    /// Override settings file path (useful for tests or shared settings)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the settings file with default values
    Init,

    /// Inspect or edit the settings file
    Config {
        #[arg(long = "print", help = "Print the current settings")]
        print_config: bool,

        #[arg(long = "path", help = "Print the settings file location")]
        path: bool,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show normalized attendance records from a CSV file
    Records {
        /// Attendance CSV file
        file: String,

        #[arg(long = "limit", help = "Show at most N rows")]
        limit: Option<usize>,
    },

    /// Per-student care statistics with screening flags
    Stats {
        /// Attendance CSV file
        file: String,

        #[arg(long = "class", help = "Restrict to one class")]
        class: Option<String>,
    },

    /// Hourly peak occupancy for one weekday
    Occupancy {
        /// Attendance CSV file
        file: String,

        /// Weekday token to project, e.g. 월
        #[arg(long = "weekday")]
        weekday: String,

        #[arg(long = "class", help = "Project a single class (enables capacity flags)")]
        class: Option<String>,

        #[arg(long = "capacity", help = "Override the configured class capacity")]
        capacity: Option<i64>,
    },

    /// Write a report to CSV, JSON, or XLSX
    Export {
        /// Attendance CSV file
        file: String,

        #[arg(long = "report", value_enum)]
        report: ReportKind,

        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Output file (absolute path)
        #[arg(long = "out")]
        out: String,

        #[arg(long = "force", help = "Overwrite an existing output file")]
        force: bool,

        /// Weekday token, required for the occupancy report
        #[arg(long = "weekday")]
        weekday: Option<String>,

        #[arg(long = "class")]
        class: Option<String>,
    },
}
