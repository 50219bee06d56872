use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// Weekday on which every week of the partition begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub const MONDAY: WeekStart = WeekStart(Weekday::Mon);
    pub const SUNDAY: WeekStart = WeekStart(Weekday::Sun);

    pub fn new(day: Weekday) -> Self {
        Self(day)
    }

    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// Parse `monday`, `Mon`, `sun`, ... (case-insensitive).
    pub fn parse(s: &str) -> AppResult<Self> {
        Weekday::from_str(s.trim())
            .map(Self)
            .map_err(|_| AppError::InvalidWeekStart(s.to_string()))
    }

    /// Days between the start of the week and `date` (0..=6).
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        let day = date.weekday().num_days_from_monday() as i64;
        let start = self.0.num_days_from_monday() as i64;
        (day - start).rem_euclid(7)
    }

    pub fn as_str(&self) -> &'static str {
        match self.0 {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One week of a year partition.
///
/// `raw_*` is the full seven-day span anchored on the week start,
/// `display_*` the part of it that falls inside the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekInterval {
    pub week_number: u32,
    pub raw_start: NaiveDate,
    pub raw_end: NaiveDate,
    pub display_start: NaiveDate,
    pub display_end: NaiveDate,
}

impl WeekInterval {
    /// Number of days of this week inside the year (1..=7).
    pub fn len_days(&self) -> i64 {
        (self.display_end - self.display_start).num_days() + 1
    }

    /// True when the week was clipped by a year boundary.
    pub fn is_partial(&self) -> bool {
        self.len_days() < 7
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.display_start <= date && date <= self.display_end
    }

    /// Short range label, e.g. `1.1-1.5`.
    pub fn label(&self) -> String {
        format!(
            "{}.{}-{}.{}",
            self.display_start.month(),
            self.display_start.day(),
            self.display_end.month(),
            self.display_end.day()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStatus {
    Past,
    Current,
    Future,
}

impl WeekStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Past => "past",
            WeekStatus::Current => "current",
            WeekStatus::Future => "future",
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, WeekStatus::Current)
    }
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_accepts_short_and_long_names() {
        assert_eq!(WeekStart::parse("Monday").unwrap(), WeekStart::MONDAY);
        assert_eq!(WeekStart::parse(" sun ").unwrap(), WeekStart::SUNDAY);
        assert!(matches!(
            WeekStart::parse("someday"),
            Err(AppError::InvalidWeekStart(_))
        ));
    }

    #[test]
    fn offset_counts_days_since_week_start() {
        // 2025-01-01 is a Wednesday
        assert_eq!(WeekStart::MONDAY.offset_of(d(2025, 1, 1)), 2);
        assert_eq!(WeekStart::SUNDAY.offset_of(d(2025, 1, 1)), 3);
        assert_eq!(WeekStart::new(Weekday::Wed).offset_of(d(2025, 1, 1)), 0);
        assert_eq!(WeekStart::new(Weekday::Thu).offset_of(d(2025, 1, 1)), 6);
    }

    #[test]
    fn label_uses_month_dot_day() {
        let w = WeekInterval {
            week_number: 1,
            raw_start: d(2024, 12, 30),
            raw_end: d(2025, 1, 5),
            display_start: d(2025, 1, 1),
            display_end: d(2025, 1, 5),
        };
        assert_eq!(w.label(), "1.1-1.5");
        assert_eq!(w.len_days(), 5);
        assert!(w.is_partial());
        assert!(w.contains(d(2025, 1, 3)));
        assert!(!w.contains(d(2024, 12, 31)));
    }
}
