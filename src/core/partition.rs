//! Year partitioning: split a calendar year into week intervals and
//! classify them against a reference day.

use crate::models::{WeekInterval, WeekStart, WeekStatus, Year};
use chrono::{NaiveDate, TimeDelta};

/// Split `year` into consecutive weeks starting on `week_start`.
///
/// The walk begins on the week containing Jan 1 and stops after the week
/// containing Dec 31. Week numbers are 1-based positions in the walk, not
/// ISO week numbers. The first and last week are clipped to the year.
pub fn partition_year(year: Year, week_start: WeekStart) -> Vec<WeekInterval> {
    let first = year.first_day();
    let last = year.last_day();

    let mut raw_start = first - TimeDelta::days(week_start.offset_of(first));
    let mut week_number = 1;
    let mut weeks = Vec::with_capacity(54);

    while raw_start <= last {
        let raw_end = raw_start + TimeDelta::days(6);

        weeks.push(WeekInterval {
            week_number,
            raw_start,
            raw_end,
            display_start: raw_start.max(first),
            display_end: raw_end.min(last),
        });

        raw_start += TimeDelta::days(7);
        week_number += 1;
    }

    weeks
}

/// Position of a week relative to `today`.
pub fn classify(interval: &WeekInterval, today: NaiveDate) -> WeekStatus {
    if interval.display_end < today {
        WeekStatus::Past
    } else if interval.contains(today) {
        WeekStatus::Current
    } else {
        WeekStatus::Future
    }
}

/// Week with the given 1-based number, if it exists in the partition.
pub fn week_by_number(weeks: &[WeekInterval], week_number: u32) -> Option<&WeekInterval> {
    week_number
        .checked_sub(1)
        .and_then(|idx| weeks.get(idx as usize))
        .filter(|w| w.week_number == week_number)
}

/// Week whose display range contains `date`.
pub fn week_of(weeks: &[WeekInterval], date: NaiveDate) -> Option<&WeekInterval> {
    weeks.iter().find(|w| w.contains(date))
}

/// The week classified as current for `today`, if `today` falls in the year.
pub fn current_week(weeks: &[WeekInterval], today: NaiveDate) -> Option<&WeekInterval> {
    weeks
        .iter()
        .find(|w| classify(w, today) == WeekStatus::Current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    const ALL_STARTS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn year(y: i32) -> Year {
        Year::new(y).unwrap()
    }

    #[test]
    fn first_week_of_2025_is_clipped_to_jan_first() {
        let weeks = partition_year(year(2025), WeekStart::MONDAY);
        let w1 = &weeks[0];

        assert_eq!(w1.week_number, 1);
        assert_eq!(w1.raw_start, d(2024, 12, 30));
        assert_eq!(w1.raw_end, d(2025, 1, 5));
        assert_eq!(w1.display_start, d(2025, 1, 1));
        assert_eq!(w1.display_start.weekday(), Weekday::Wed);
        assert_eq!(w1.display_end, d(2025, 1, 5));
        assert_eq!(w1.display_end.weekday(), Weekday::Sun);
        assert_eq!(w1.label(), "1.1-1.5");
    }

    #[test]
    fn last_week_of_2025_is_clipped_to_dec_31() {
        let weeks = partition_year(year(2025), WeekStart::MONDAY);
        let last = weeks.last().unwrap();

        assert_eq!(weeks.len(), 53);
        assert_eq!(last.week_number, 53);
        assert_eq!(last.display_start, d(2025, 12, 29));
        assert_eq!(last.display_end, d(2025, 12, 31));
        assert_eq!(last.raw_end, d(2026, 1, 4));
        assert!(last.is_partial());
    }

    #[test]
    fn leap_year_starting_on_sunday_has_54_monday_weeks() {
        // 2012-01-01 was a Sunday and 2012 is a leap year
        let weeks = partition_year(year(2012), WeekStart::MONDAY);

        assert_eq!(weeks.len(), 54);
        assert_eq!(weeks[0].len_days(), 1);
        assert_eq!(weeks[53].display_start, d(2012, 12, 31));
        assert_eq!(weeks[53].len_days(), 1);
    }

    #[test]
    fn aligned_year_has_full_first_week() {
        // 2024-01-01 was a Monday
        let weeks = partition_year(year(2024), WeekStart::MONDAY);

        assert_eq!(weeks[0].raw_start, d(2024, 1, 1));
        assert!(!weeks[0].is_partial());
    }

    #[test]
    fn partition_covers_every_year_without_gaps() {
        for y in (1890..=2110).chain([-1, 0, 1]) {
            for start in ALL_STARTS {
                let yr = year(y);
                let weeks = partition_year(yr, WeekStart::new(start));

                assert_eq!(weeks[0].display_start, yr.first_day(), "{y} {start}");
                assert_eq!(weeks.last().unwrap().display_end, yr.last_day(), "{y} {start}");

                for (idx, w) in weeks.iter().enumerate() {
                    assert_eq!(w.week_number as usize, idx + 1);
                    assert_eq!(w.raw_end - w.raw_start, TimeDelta::days(6));
                    assert_eq!(w.raw_start.weekday(), start);
                    assert!(w.display_start <= w.display_end);
                }

                for pair in weeks.windows(2) {
                    assert!(pair[0].display_end < pair[1].display_end);
                    assert_eq!(
                        pair[0].display_end + TimeDelta::days(1),
                        pair[1].display_start
                    );
                }

                let days: i64 = weeks.iter().map(|w| w.len_days()).sum();
                assert_eq!(days, if yr.is_leap() { 366 } else { 365 });
            }
        }
    }

    #[test]
    fn extreme_years_still_partition() {
        for y in [crate::models::year::MIN_YEAR, crate::models::year::MAX_YEAR] {
            let weeks = partition_year(year(y), WeekStart::SUNDAY);
            assert!(weeks.len() >= 53);
        }
    }

    #[test]
    fn classify_splits_weeks_around_today() {
        let weeks = partition_year(year(2025), WeekStart::MONDAY);
        let today = d(2025, 3, 12);

        assert_eq!(classify(&weeks[0], today), WeekStatus::Past);
        assert_eq!(classify(&weeks[52], today), WeekStatus::Future);

        let current: Vec<_> = weeks
            .iter()
            .filter(|w| classify(w, today) == WeekStatus::Current)
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].display_start, d(2025, 3, 10));
        assert_eq!(current_week(&weeks, today), Some(current[0]));
    }

    #[test]
    fn classify_uses_clipped_bounds() {
        let weeks = partition_year(year(2025), WeekStart::MONDAY);

        // Dec 31 2024 is inside week 1's raw span but not its display span
        assert_eq!(classify(&weeks[0], d(2024, 12, 31)), WeekStatus::Future);
        assert_eq!(classify(&weeks[0], d(2025, 1, 1)), WeekStatus::Current);
        assert_eq!(classify(&weeks[0], d(2025, 1, 5)), WeekStatus::Current);
        assert_eq!(classify(&weeks[0], d(2025, 1, 6)), WeekStatus::Past);
    }

    #[test]
    fn at_most_one_current_week_for_any_day() {
        let weeks = partition_year(year(2024), WeekStart::SUNDAY);
        let mut day = d(2023, 12, 25);

        while day <= d(2025, 1, 7) {
            let current = weeks
                .iter()
                .filter(|w| classify(w, day).is_current())
                .count();
            let expected = usize::from(day.year() == 2024);
            assert_eq!(current, expected, "{day}");
            day += TimeDelta::days(1);
        }
    }

    #[test]
    fn lookup_helpers() {
        let weeks = partition_year(year(2025), WeekStart::MONDAY);

        assert_eq!(week_by_number(&weeks, 1).unwrap().display_start, d(2025, 1, 1));
        assert_eq!(week_by_number(&weeks, 53).unwrap().display_end, d(2025, 12, 31));
        assert!(week_by_number(&weeks, 0).is_none());
        assert!(week_by_number(&weeks, 54).is_none());

        assert_eq!(week_of(&weeks, d(2025, 1, 6)).unwrap().week_number, 2);
        assert!(week_of(&weeks, d(2026, 1, 1)).is_none());
        assert!(current_week(&weeks, d(2026, 1, 1)).is_none());
    }
}
