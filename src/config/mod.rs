use crate::core::editor::DEFAULT_QUIET_PERIOD;
use crate::errors::{AppError, AppResult};
use crate::models::WeekStart;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "YEEKS_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
}

fn default_week_start() -> String {
    WeekStart::default().as_str().to_string()
}

fn default_quiet_period_ms() -> u64 {
    DEFAULT_QUIET_PERIOD.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            week_start: default_week_start(),
            quiet_period_ms: default_quiet_period_ms(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`$YEEKS_HOME` or `~/.yeeks`).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".yeeks")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("yeeks.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("yeeks.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn week_start(&self) -> AppResult<WeekStart> {
        WeekStart::parse(&self.week_start)
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    /// Database path with `~` expanded and relative paths anchored on the
    /// config directory.
    pub fn database_path(&self) -> PathBuf {
        resolve_in(&self.database, &Self::config_dir())
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::default();
        if let Some(db) = custom_db {
            config.database = db.to_string();
        }
        let db_path = config.database_path();

        if !is_test {
            config.save()?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// Validate every field, collecting all problems.
    pub fn check(&self) -> AppResult<()> {
        let mut problems = Vec::new();

        if self.database.trim().is_empty() {
            problems.push("database path is empty".to_string());
        }
        if let Err(e) = self.week_start() {
            problems.push(e.to_string());
        }
        if self.quiet_period_ms == 0 {
            problems.push("quiet_period_ms must be greater than zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(problems.join("; ")))
        }
    }
}
