//! Calendar arithmetic for report periods.
//!
//! All helpers take `today` explicitly; nothing in here reads the clock.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Date format used for ISO dates in queries, storage and output.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive span of calendar days.
///
/// The bounds are ordered on construction, so `start() <= end()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two bounds given in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(ISO_DATE_FORMAT),
            self.end.format(ISO_DATE_FORMAT)
        )
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible calendar days.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).ok()
}

/// Monday through Sunday of the week containing `today`.
#[must_use]
pub fn week_bounds(today: NaiveDate) -> DateRange {
    let offset = i64::from(today.weekday().num_days_from_monday());
    let start = today
        .checked_sub_signed(Duration::days(offset))
        .unwrap_or(today);
    let end = start.checked_add_signed(Duration::days(6)).unwrap_or(today);
    DateRange::new(start, end)
}

/// First through last day of the month containing `today`.
#[must_use]
pub fn month_bounds(today: NaiveDate) -> DateRange {
    let start = today.with_day(1).unwrap_or(today);
    // One month forward, one day back: handles month lengths, leap years and December.
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    DateRange::new(start, end)
}

/// The full calendar month before the one containing `today`.
#[must_use]
pub fn previous_month_bounds(today: NaiveDate) -> DateRange {
    let first_of_this_month = today.with_day(1).unwrap_or(today);
    let end = first_of_this_month.pred_opt().unwrap_or(first_of_this_month);
    let start = end.with_day(1).unwrap_or(end);
    DateRange::new(start, end)
}

/// January 1 through December 31 of the year containing `today`.
#[must_use]
pub fn year_bounds(today: NaiveDate) -> DateRange {
    let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
    DateRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_orders_bounds() {
        let range = DateRange::new(date(2024, 5, 10), date(2024, 5, 1));
        assert_eq!(range.start(), date(2024, 5, 1));
        assert_eq!(range.end(), date(2024, 5, 10));
    }

    #[test]
    fn test_range_display() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");
    }

    #[test]
    fn test_range_single_day() {
        let range = DateRange::new(date(2024, 3, 9), date(2024, 3, 9));
        assert_eq!(range.start(), range.end());
        assert_eq!(range.to_string(), "2024-03-09 to 2024-03-09");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-12-15"), Some(date(2024, 12, 15)));
        assert_eq!(parse_iso_date(" 2024-02-29 "), Some(date(2024, 2, 29)));
        assert_eq!(parse_iso_date("2023-02-29"), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
        assert_eq!(parse_iso_date("tomorrow"), None);
    }

    #[test]
    fn test_week_bounds_midweek() {
        // 2024-06-05 is a Wednesday
        let range = week_bounds(date(2024, 6, 5));
        assert_eq!(range.start(), date(2024, 6, 3));
        assert_eq!(range.end(), date(2024, 6, 9));
    }

    #[test]
    fn test_week_bounds_on_monday_and_sunday() {
        assert_eq!(week_bounds(date(2024, 6, 3)).start(), date(2024, 6, 3));
        assert_eq!(week_bounds(date(2024, 6, 9)).start(), date(2024, 6, 3));
    }

    #[test]
    fn test_week_bounds_across_year_end() {
        // 2025-01-01 is a Wednesday
        let range = week_bounds(date(2025, 1, 1));
        assert_eq!(range.start(), date(2024, 12, 30));
        assert_eq!(range.end(), date(2025, 1, 5));
    }

    #[test]
    fn test_month_bounds_leap_february() {
        let range = month_bounds(date(2024, 2, 15));
        assert_eq!(range.start(), date(2024, 2, 1));
        assert_eq!(range.end(), date(2024, 2, 29));
    }

    #[test]
    fn test_month_bounds_common_february() {
        assert_eq!(month_bounds(date(2023, 2, 3)).end(), date(2023, 2, 28));
    }

    #[test]
    fn test_month_bounds_december() {
        let range = month_bounds(date(2024, 12, 31));
        assert_eq!(range.start(), date(2024, 12, 1));
        assert_eq!(range.end(), date(2024, 12, 31));
    }

    #[test]
    fn test_previous_month_bounds_january() {
        let range = previous_month_bounds(date(2024, 1, 10));
        assert_eq!(range.start(), date(2023, 12, 1));
        assert_eq!(range.end(), date(2023, 12, 31));
    }

    #[test]
    fn test_previous_month_bounds_march_leap() {
        let range = previous_month_bounds(date(2024, 3, 31));
        assert_eq!(range.start(), date(2024, 2, 1));
        assert_eq!(range.end(), date(2024, 2, 29));
    }

    #[test]
    fn test_year_bounds() {
        let range = year_bounds(date(2024, 6, 1));
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 12, 31));
    }
}
