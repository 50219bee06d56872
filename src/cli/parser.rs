use clap::{Parser, Subcommand};

/// Command-line interface definition for yeeks
#[derive(Parser)]
#[command(
    name = "yeeks",
    version = env!("CARGO_PKG_VERSION"),
    about = "Your year in weeks: a week grid with a note for every week",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Keep notes in memory only (nothing is persisted)
    #[arg(global = true, long = "memory", conflicts_with = "db")]
    pub memory: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Year to show (default: the current year)
    #[arg(global = true, long = "year", short = 'y', allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Weekday weeks start on (monday, sunday, ...)
    #[arg(global = true, long = "week-start")]
    pub week_start: Option<String>,

    /// Use this date (YYYY-MM-DD) as today
    #[arg(global = true, long = "today")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Print the year as a grid of weeks
    Show,

    /// List every week of the year with its range and status
    Weeks,

    /// Show a single week and its note
    Week {
        /// Week number (1-based position in the year)
        week: u32,
    },

    /// Read or write week notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Print the note of a week
    Get { week: u32 },

    /// Replace the note of a week
    Set { week: u32, text: String },

    /// Empty the note of a week (the record is kept)
    Clear { week: u32 },

    /// Write the note of a week from stdin, saving after input goes quiet
    Edit { week: u32 },

    /// List the notes of the year
    List,
}
