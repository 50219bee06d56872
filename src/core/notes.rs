//! Per-week note store.
//!
//! The store keeps the notes of exactly one year in memory. That mapping is
//! the source of truth for the session; the backend only holds a mirror of
//! it, rewritten as a whole on every save.
//!
//! Persistence is best-effort: an unreadable payload loads as an empty year
//! and a failed write is logged and dropped.

use crate::errors::AppResult;
use crate::models::{NoteMap, WeekNote, Year};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Storage medium holding one serialized note mapping per year.
pub trait NoteBackend {
    /// Raw payload stored for `year`, `None` if nothing was ever written.
    fn read(&self, year: i32) -> AppResult<Option<String>>;

    /// Replace the payload stored for `year`.
    fn write(&mut self, year: i32, payload: &str) -> AppResult<()>;
}

impl<B: NoteBackend + ?Sized> NoteBackend for Box<B> {
    fn read(&self, year: i32) -> AppResult<Option<String>> {
        (**self).read(year)
    }

    fn write(&mut self, year: i32, payload: &str) -> AppResult<()> {
        (**self).write(year, payload)
    }
}

/// Volatile backend, used by tests and `--memory` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    payloads: HashMap<i32, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload, bypassing encoding.
    pub fn with_payload(mut self, year: i32, payload: impl Into<String>) -> Self {
        self.payloads.insert(year, payload.into());
        self
    }

    pub fn payload(&self, year: i32) -> Option<&str> {
        self.payloads.get(&year).map(String::as_str)
    }
}

impl NoteBackend for MemoryBackend {
    fn read(&self, year: i32) -> AppResult<Option<String>> {
        Ok(self.payloads.get(&year).cloned())
    }

    fn write(&mut self, year: i32, payload: &str) -> AppResult<()> {
        self.payloads.insert(year, payload.to_string());
        Ok(())
    }
}

/// Serialize a year's notes as `{"<week>": {"content", "lastModified"}}`.
pub fn encode_notes(notes: &NoteMap) -> AppResult<String> {
    Ok(serde_json::to_string(notes)?)
}

pub fn decode_notes(payload: &str) -> AppResult<NoteMap> {
    Ok(serde_json::from_str(payload)?)
}

/// Note of `week_number` in `notes`.
pub fn get(notes: &NoteMap, week_number: u32) -> Option<&WeekNote> {
    notes.get(&week_number)
}

pub struct NoteStore<B: NoteBackend> {
    backend: B,
    year: Option<Year>,
    notes: NoteMap,
}

impl<B: NoteBackend> NoteStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            year: None,
            notes: NoteMap::new(),
        }
    }

    /// Year whose notes are currently loaded.
    pub fn year(&self) -> Option<Year> {
        self.year
    }

    pub fn notes(&self) -> &NoteMap {
        &self.notes
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Replace the in-memory mapping with the persisted notes of `year`.
    ///
    /// Missing, unreadable or malformed payloads all yield an empty mapping.
    pub fn load(&mut self, year: Year) -> &NoteMap {
        self.notes = self.read_year(year);
        self.year = Some(year);
        &self.notes
    }

    fn read_year(&self, year: Year) -> NoteMap {
        let payload = match self.backend.read(year.value()) {
            Ok(Some(p)) => p,
            Ok(None) => return NoteMap::new(),
            Err(e) => {
                log::warn!("notes for {year} could not be read, starting empty: {e}");
                return NoteMap::new();
            }
        };

        match decode_notes(&payload) {
            Ok(notes) => {
                log::debug!("loaded {} notes for {year}", notes.len());
                notes
            }
            Err(e) => {
                log::warn!("notes for {year} are malformed, starting empty: {e}");
                NoteMap::new()
            }
        }
    }

    /// Save `content` for a week, stamped with the current time.
    pub fn save(&mut self, year: Year, week_number: u32, content: &str) -> WeekNote {
        self.save_at(year, week_number, content, Utc::now())
    }

    /// Save `content` for a week with an explicit modification time.
    ///
    /// Any previous note of that week is replaced, then the whole year is
    /// written back. Saving into a year other than the loaded one loads it
    /// first.
    pub fn save_at(
        &mut self,
        year: Year,
        week_number: u32,
        content: &str,
        now: DateTime<Utc>,
    ) -> WeekNote {
        if self.year != Some(year) {
            self.load(year);
        }

        let note = WeekNote::new(content, now);
        self.notes.insert(week_number, note.clone());

        if let Err(e) = self.persist(year) {
            log::warn!("notes for {year} were not persisted (week {week_number}): {e}");
        }

        note
    }

    fn persist(&mut self, year: Year) -> AppResult<()> {
        let payload = encode_notes(&self.notes)?;
        self.backend.write(year.value(), &payload)
    }
}
