//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Note payload error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid week start: {0}")]
    InvalidWeekStart(String),

    #[error("Week {week} does not exist in {year}")]
    InvalidWeek { year: i32, week: u32 },

    // ---------------------------
    // Storage errors
    // ---------------------------
    #[error("Note storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
