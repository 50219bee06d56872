use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Lowest year accepted by [`Year::new`].
///
/// Kept a few years inside chrono's representable range so that the week
/// walk (which reaches up to six days outside the year) never overflows.
pub const MIN_YEAR: i32 = -262_000;
/// Highest year accepted by [`Year::new`].
pub const MAX_YEAR: i32 = 262_000;

/// A validated calendar year with its first and last day precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year {
    value: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Year {
    pub fn new(value: i32) -> AppResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(AppError::InvalidYear(value));
        }

        let first_day = NaiveDate::from_ymd_opt(value, 1, 1).ok_or(AppError::InvalidYear(value))?;
        let last_day =
            NaiveDate::from_ymd_opt(value, 12, 31).ok_or(AppError::InvalidYear(value))?;

        Ok(Self {
            value,
            first_day,
            last_day,
        })
    }

    /// Year containing the given date.
    pub fn of(date: NaiveDate) -> AppResult<Self> {
        Self::new(date.year())
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Jan 1.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Dec 31.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn is_leap(&self) -> bool {
        self.last_day.ordinal() == 366
    }
}

impl TryFrom<i32> for Year {
    type Error = AppError;

    fn try_from(value: i32) -> AppResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
