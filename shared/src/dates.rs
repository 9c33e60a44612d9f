//! Date arithmetic and formatting used by the goal and activity forms.
//!
//! Everything here works on [`NaiveDate`] so the form logic stays free of
//! browser APIs; callers pass today's date in.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Selection granularity of the date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerMode {
    Day,
    Month,
    Year,
}

/// End date of a window that starts on `start` and spans `days` calendar
/// days inclusive, so `add_days(Jan 1, 10)` is Jan 10. `None` when the
/// count lands outside the representable calendar.
pub fn add_days(start: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = days.checked_sub(1)?;
    start.checked_add_signed(Duration::try_days(delta)?)
}

/// Inclusive day count of the window `[start, end]`; the inverse of
/// [`add_days`].
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Fixed `YYYY-MM-DD` rendering, independent of the browser locale
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whether the picker may offer `date` at all. Weekends are excluded in
/// day mode; month and year granularity have no weekend to exclude.
pub fn is_selectable(date: NaiveDate, mode: DatePickerMode) -> bool {
    !(mode == DatePickerMode::Day
        && matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Weekday column of the month's first day (0 = Sunday, 6 = Saturday)
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_is_inclusive_of_the_start_day() {
        assert_eq!(add_days(date(2024, 1, 1), 10), Some(date(2024, 1, 10)));
        assert_eq!(add_days(date(2024, 1, 1), 1), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_add_days_crosses_month_and_leap_boundaries() {
        assert_eq!(add_days(date(2024, 2, 28), 3), Some(date(2024, 3, 1)));
        assert_eq!(add_days(date(2023, 2, 28), 3), Some(date(2023, 3, 2)));
    }

    #[test]
    fn test_add_days_outside_the_calendar_is_none() {
        let start = date(2024, 1, 1);
        assert_eq!(add_days(start, 99_999_999), None);
        assert_eq!(add_days(start, -99_999_999), None);
        assert_eq!(add_days(start, i64::MAX), None);
        assert_eq!(add_days(start, i64::MIN), None);
    }

    #[test]
    fn test_days_between_inclusive_counts_both_endpoints() {
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 10)), 10);
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_days_between_inverts_add_days() {
        let start = date(2024, 5, 20);
        for days in 1..=60 {
            let end = add_days(start, days).unwrap();
            assert_eq!(days_between_inclusive(start, end), days);
        }
    }

    #[test]
    fn test_format_iso_pads_components() {
        assert_eq!(format_iso(date(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn test_weekends_are_not_selectable_in_day_mode() {
        // 2024-06-10 is a Monday
        let monday = date(2024, 6, 10);
        for offset in 0..5 {
            assert!(is_selectable(monday + Duration::days(offset), DatePickerMode::Day));
        }
        let saturday = date(2024, 6, 15);
        let sunday = date(2024, 6, 16);
        assert!(!is_selectable(saturday, DatePickerMode::Day));
        assert!(!is_selectable(sunday, DatePickerMode::Day));
    }

    #[test]
    fn test_other_modes_allow_weekends() {
        let saturday = date(2024, 6, 15);
        assert!(is_selectable(saturday, DatePickerMode::Month));
        assert!(is_selectable(saturday, DatePickerMode::Year));
    }

    #[test]
    fn test_days_in_month_handles_leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_first_weekday_offset() {
        // June 2024 starts on a Saturday
        assert_eq!(first_weekday_offset(2024, 6), 6);
        // September 2024 starts on a Sunday
        assert_eq!(first_weekday_offset(2024, 9), 0);
    }
}
