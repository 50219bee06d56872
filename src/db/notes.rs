//! SQLite mirror of the note store: one row per year.

use crate::core::notes::NoteBackend;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    /// Open the database at `path`, running pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl NoteBackend for SqliteBackend {
    fn read(&self, year: i32) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT payload FROM notes WHERE year = ?1")?;
        let payload = stmt
            .query_row([year], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(payload)
    }

    fn write(&mut self, year: i32, payload: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO notes (year, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(year) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at",
            params![year, payload, now],
        )?;
        Ok(())
    }
}
