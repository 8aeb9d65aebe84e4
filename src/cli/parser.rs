use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftboard
#[derive(Parser)]
#[command(
    name = "shiftboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift board for the terminal: import a roster, track breaks and project shift ends",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock ("YYYY-MM-DD HH:MM") instead of reading the local time
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Import a roster, replacing the current one
    Import {
        /// Workbook (.xlsx, .xls, .ods: first sheet) or CSV: name, start date, start time, end date, end time, planned break hours
        file: String,
    },

    /// Show the board
    List {
        #[arg(long = "timeline", help = "Also draw the timeline below the board")]
        timeline: bool,
    },

    /// Start a break for an employee (name or row number)
    Start { employee: String },

    /// End the open break of an employee (name or row number)
    End { employee: String },

    /// Edit a recorded break
    Edit {
        employee: String,

        #[arg(long = "break", help = "Break number as shown on the board (1 = first)")]
        break_no: usize,

        #[arg(long = "start", help = "New start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "New end time (HH:MM)")]
        end: String,
    },

    /// Remove every employee from the board
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Draw the timeline of the day
    Timeline {
        #[arg(long, help = "Bar width in characters")]
        width: Option<usize>,
    },

    /// Keep the board on screen, refreshing it periodically
    Watch {
        #[arg(long, help = "Stop after N refreshes")]
        ticks: Option<u64>,

        #[arg(long, help = "Seconds between refreshes (default from config)")]
        every: Option<u64>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export the board
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
