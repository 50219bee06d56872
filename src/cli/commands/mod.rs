pub mod config;
pub mod init;
pub mod log;
pub mod note;
pub mod show;
pub mod weeks;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::notes::{MemoryBackend, NoteBackend, NoteStore};
use crate::core::partition::{partition_year, week_by_number};
use crate::db::SqliteBackend;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{WeekInterval, WeekStart, Year};
use crate::utils::date;
use chrono::NaiveDate;
use std::path::PathBuf;

pub type DynNoteStore = NoteStore<Box<dyn NoteBackend>>;

/// Everything a command needs: resolved config, selected year and today.
pub struct Session {
    pub cfg: Config,
    pub year: Year,
    pub week_start: WeekStart,
    pub today: NaiveDate,
    pub memory: bool,
}

impl Session {
    /// Resolve CLI overrides on top of the loaded configuration.
    pub fn from_cli(cli: &Cli, cfg: Config) -> AppResult<Self> {
        let today = match &cli.today {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::Other(format!("Invalid date: {raw}")))?
            }
            None => date::today(),
        };

        let year = match cli.year {
            Some(y) => Year::new(y)?,
            None => Year::of(today)?,
        };

        let week_start = match &cli.week_start {
            Some(raw) => WeekStart::parse(raw)?,
            None => cfg.week_start()?,
        };

        Ok(Self {
            cfg,
            year,
            week_start,
            today,
            memory: cli.memory,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.cfg.database_path()
    }

    pub fn weeks(&self) -> Vec<WeekInterval> {
        partition_year(self.year, self.week_start)
    }

    /// The week numbered `week_number` in the selected year.
    pub fn week(&self, week_number: u32) -> AppResult<WeekInterval> {
        week_by_number(&self.weeks(), week_number)
            .copied()
            .ok_or(AppError::InvalidWeek {
                year: self.year.value(),
                week: week_number,
            })
    }

    /// Note store for the selected year, already loaded.
    pub fn open_store(&self) -> AppResult<DynNoteStore> {
        let backend: Box<dyn NoteBackend> = if self.memory {
            Box::new(MemoryBackend::new())
        } else {
            Box::new(SqliteBackend::open(&self.db_path().to_string_lossy())?)
        };

        let mut store = NoteStore::new(backend);
        store.load(self.year);
        Ok(store)
    }

    /// Append an entry to the internal log table. Never fails the command.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if self.memory {
            return;
        }

        let result = DbPool::new(&self.db_path().to_string_lossy())
            .map_err(AppError::from)
            .and_then(|pool| ttlog(&pool.conn, operation, target, message));

        if let Err(e) = result {
            ::log::warn!("failed to write internal log: {e}");
        }
    }
}
