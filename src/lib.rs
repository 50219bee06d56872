//! yeeks library root.
//! Week partitioning, week notes and the CLI built on top of them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Session};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::notes::{MemoryBackend, NoteBackend, NoteStore, get};
pub use crate::core::partition::{classify, partition_year};
pub use crate::db::SqliteBackend;
pub use crate::errors::AppError;
pub use crate::models::{NoteMap, WeekInterval, WeekNote, WeekStart, WeekStatus, Year};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return commands::init::handle(cli),
        Commands::Config { .. } => return commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let session = Session::from_cli(cli, cfg)?;

    match &cli.command {
        Commands::Show => commands::show::handle(&session),
        Commands::Weeks => commands::weeks::list(&session),
        Commands::Week { week } => commands::weeks::show(&session, *week),
        Commands::Note { action } => commands::note::handle(action, &session),
        Commands::Log { .. } => commands::log::handle(&cli.command, &session),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, cfg)
}
