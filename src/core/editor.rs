//! Debounced note editing.
//!
//! An edit surface does not write on every change. Each change replaces the
//! single pending save and restarts the quiet period; the save goes through
//! once no change arrived for that long. Time is passed in explicitly so the
//! caller decides how it is driven (event loop, timer thread, tests).
//!
//! Switching to another week or year, or closing the editor, drops the
//! pending save of the previous target.

use crate::core::notes::{NoteBackend, NoteStore, get};
use crate::models::{WeekNote, Year};
use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Week a pending save belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditTarget {
    pub year: Year,
    pub week_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub target: EditTarget,
    pub content: String,
    last_edit: Instant,
}

/// One cancellable delayed save.
#[derive(Debug)]
pub struct SaveDebouncer {
    quiet_period: Duration,
    pending: Option<PendingSave>,
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl SaveDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn pending(&self) -> Option<&PendingSave> {
        self.pending.as_ref()
    }

    /// Replace any pending save and restart the quiet period at `now`.
    pub fn schedule(&mut self, target: EditTarget, content: impl Into<String>, now: Instant) {
        self.pending = Some(PendingSave {
            target,
            content: content.into(),
            last_edit: now,
        });
    }

    pub fn cancel(&mut self) -> Option<PendingSave> {
        self.pending.take()
    }

    /// Time left before the pending save is due, `None` when idle.
    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| {
            self.quiet_period
                .saturating_sub(now.saturating_duration_since(p.last_edit))
        })
    }

    /// Take the pending save if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<PendingSave> {
        match self.due_in(now) {
            Some(left) if left.is_zero() => self.pending.take(),
            _ => None,
        }
    }
}

/// Edit session over a note store: one open week at a time.
pub struct NoteEditor<B: NoteBackend> {
    store: NoteStore<B>,
    target: Option<EditTarget>,
    debouncer: SaveDebouncer,
}

impl<B: NoteBackend> NoteEditor<B> {
    pub fn new(store: NoteStore<B>, quiet_period: Duration) -> Self {
        Self {
            store,
            target: None,
            debouncer: SaveDebouncer::new(quiet_period),
        }
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn into_store(self) -> NoteStore<B> {
        self.store
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.pending().is_some()
    }

    /// Time left before the pending save is due.
    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.debouncer.due_in(now)
    }

    /// Open `week_number` of `year` for editing and return its note.
    ///
    /// A pending save for a different target is dropped. Opening another
    /// year reloads the store.
    pub fn open(&mut self, year: Year, week_number: u32) -> Option<&WeekNote> {
        let target = EditTarget { year, week_number };

        if self.target != Some(target) {
            self.drop_pending();
        }
        if self.store.year() != Some(year) {
            self.store.load(year);
        }

        self.target = Some(target);
        get(self.store.notes(), week_number)
    }

    /// Record new content for the open week. Returns false if nothing is open.
    pub fn edit(&mut self, content: impl Into<String>, now: Instant) -> bool {
        match self.target {
            Some(target) => {
                self.debouncer.schedule(target, content, now);
                true
            }
            None => false,
        }
    }

    /// Run the pending save if it is due.
    ///
    /// Content equal to the stored note (an absent note counts as empty) is
    /// not written again.
    pub fn tick(&mut self, now: Instant) -> Option<WeekNote> {
        let due = self.debouncer.poll(now)?;
        let EditTarget { year, week_number } = due.target;

        if self.store.year() != Some(year) {
            log::debug!("dropping save for week {week_number} of {year}: year no longer loaded");
            return None;
        }

        let current = get(self.store.notes(), week_number)
            .map(|n| n.content.as_str())
            .unwrap_or("");
        if current == due.content {
            return None;
        }

        Some(self.store.save(year, week_number, &due.content))
    }

    /// Close the open week, dropping any pending save.
    pub fn close(&mut self) {
        self.drop_pending();
        self.target = None;
    }

    fn drop_pending(&mut self) {
        if let Some(p) = self.debouncer.cancel() {
            log::debug!(
                "cancelled pending save for week {} of {}",
                p.target.week_number,
                p.target.year
            );
        }
    }
}
