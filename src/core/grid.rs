use crate::core::partition::{classify, partition_year};
use crate::models::{NoteMap, WeekInterval, WeekStart, WeekStatus, Year};
use chrono::NaiveDate;

pub const GRID_COLUMNS: usize = 7;

/// A week as shown in the year grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCell {
    pub interval: WeekInterval,
    pub status: WeekStatus,
    pub has_note: bool,
}

/// The year's weeks laid out seven per row.
#[derive(Debug, Clone)]
pub struct YearGrid {
    pub year: Year,
    pub week_start: WeekStart,
    pub today: NaiveDate,
    pub cells: Vec<WeekCell>,
}

impl YearGrid {
    pub fn build(year: Year, week_start: WeekStart, today: NaiveDate, notes: &NoteMap) -> Self {
        let cells = partition_year(year, week_start)
            .into_iter()
            .map(|interval| WeekCell {
                status: classify(&interval, today),
                has_note: notes
                    .get(&interval.week_number)
                    .is_some_and(|n| n.has_content()),
                interval,
            })
            .collect();

        Self {
            year,
            week_start,
            today,
            cells,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(GRID_COLUMNS)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[WeekCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn current(&self) -> Option<&WeekCell> {
        self.cells.iter().find(|c| c.status.is_current())
    }

    pub fn count(&self, status: WeekStatus) -> usize {
        self.cells.iter().filter(|c| c.status == status).count()
    }
}
