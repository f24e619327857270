mod config;
mod consts;
mod constraints;
mod navigation;
mod prelude;
mod selection;
mod store;
mod types;

pub use config::{AnchorDuration, DurationRule, PickerConfig};
pub use consts::*;
pub use constraints::{ConstraintError, ConstraintSet, DurationBounds};
pub use navigation::Navigation;
pub use selection::{DateChangeKind, Selection};
pub use store::{ExternalSync, PickerState, PickerStateStore};
pub use types::{DisplayPeriod, SwipeDirection, ViewMode};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::days_in_month;

/// A semantic calendar date: year, month index (0 = January), day of month.
/// Always midnight-normalized by construction; there is no time-of-day
/// component. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for {year}-{:02}", "month + 1")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from a year, a 0-based month index, and a day of month.
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range for the
    /// representable calendar (years `MIN_YEAR..=MAX_YEAR`).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month > MAX_MONTH_INDEX {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month index (0 = January, 11 = December)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1-based)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Number of days since 1970-01-01. Negative before the epoch.
    /// This is the normalized timestamp used for disabled-date membership
    /// and range-duration arithmetic.
    pub const fn day_number(self) -> i64 {
        days_from_civil(self.year as i64, self.month as i64 + 1, self.day as i64)
    }

    /// Signed day count from `self` to `other` (positive when `other` is later)
    pub const fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Returns the date `delta` whole days away from `self`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the result leaves the
    /// representable calendar range.
    pub fn add_days(self, delta: i64) -> Result<Self, DateError> {
        let (year, month, day) = civil_from_days(self.day_number() + delta);
        let Ok(year) = i32::try_from(year) else {
            return Err(DateError::InvalidYear(i32::MAX));
        };
        Self::new(year, month - 1, day)
    }
}

// Civil-calendar day arithmetic (proleptic Gregorian). The pair below is the
// standard era-based conversion; months here are 1-based.

const fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146097 + doe - 719468
}

const fn civil_from_days(z: i64) -> (i64, u8, u8) {
    let z = z + 719468;
    let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
    let doe = z - era * 146097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if month <= 2 { yoe + era * 400 + 1 } else { yoe + era * 400 };
    (year, month as u8, day as u8)
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses strict ISO 8601 `YYYY-MM-DD`. The textual month is 1-based;
    /// the parsed value stores it as a 0-based index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {s}"
            )));
        }

        let year = parse_i32(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        let Some(index) = month.checked_sub(1) else {
            return Err(DateError::InvalidFormat(format!("Month out of range: {month}")));
        };
        Self::new(year, index, day)
    }
}

fn parse_i32(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let date = CalendarDate::new(2024, 2, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_new_invalid_year() {
        assert!(matches!(
            CalendarDate::new(0, 0, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 0, 1),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_new_invalid_month_index() {
        let result = CalendarDate::new(2024, 12, 1);
        assert!(matches!(result, Err(DateError::InvalidMonth(12))));
    }

    #[test]
    fn test_new_invalid_day() {
        // April (index 3) has 30 days
        let result = CalendarDate::new(2024, 3, 31);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2024,
                month: 3,
                day: 31
            })
        ));
        assert!(CalendarDate::new(2024, 3, 30).is_ok());
    }

    #[test]
    fn test_leap_day_validation() {
        // 2024 is a leap year, 2023 is not
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
        assert!(matches!(
            CalendarDate::new(2023, 1, 29),
            Err(DateError::InvalidDay { .. })
        ));
        // 1900 is a century non-leap year, 2000 is leap
        assert!(CalendarDate::new(1900, 1, 29).is_err());
        assert!(CalendarDate::new(2000, 1, 29).is_ok());
    }

    #[test]
    fn test_parse_iso() {
        let date = "2024-03-15".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::new(2024, 2, 15).unwrap());
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 2024-03-15 ".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::new(2024, 2, 15).unwrap());
    }

    #[test]
    fn test_parse_rejects_partial_dates() {
        assert!("2024".parse::<CalendarDate>().is_err());
        assert!("2024-03".parse::<CalendarDate>().is_err());
        assert!("2024-03-15-01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            "  ".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_bad_tokens() {
        assert!(matches!(
            "20XX-03-15".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-3X-15".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_invalid_month() {
        let result = "2024-13-01".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::InvalidMonth(12))));
        let result = "2024-00-01".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::new(2024, 2, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        let date = CalendarDate::new(1899, 11, 31).unwrap();
        assert_eq!(date.to_string(), "1899-12-31");
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::new(2024, 2, 15).unwrap();
        let b = CalendarDate::new(2024, 2, 16).unwrap();
        let c = CalendarDate::new(2024, 3, 1).unwrap();
        let d = CalendarDate::new(2025, 0, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(a, a);
    }

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(CalendarDate::new(1970, 0, 1).unwrap().day_number(), 0);
        assert_eq!(CalendarDate::new(1970, 0, 2).unwrap().day_number(), 1);
        assert_eq!(CalendarDate::new(1969, 11, 31).unwrap().day_number(), -1);
    }

    #[test]
    fn test_day_number_known_dates() {
        // 2000-03-01 is day 11017
        assert_eq!(CalendarDate::new(2000, 2, 1).unwrap().day_number(), 11017);
    }

    #[test]
    fn test_days_until() {
        let start = CalendarDate::new(2024, 1, 28).unwrap();
        let end = CalendarDate::new(2024, 2, 1).unwrap();
        // 2024 is a leap year: Feb 28 -> 29 -> Mar 1
        assert_eq!(start.days_until(end), 2);
        assert_eq!(end.days_until(start), -2);
    }

    #[test]
    fn test_add_days() {
        let date = CalendarDate::new(2024, 1, 28).unwrap();
        assert_eq!(
            date.add_days(1).unwrap(),
            CalendarDate::new(2024, 1, 29).unwrap()
        );
        assert_eq!(
            date.add_days(2).unwrap(),
            CalendarDate::new(2024, 2, 1).unwrap()
        );
        assert_eq!(date.add_days(-28).unwrap().to_string(), "2024-01-31");
    }

    #[test]
    fn test_add_days_round_trip() {
        let date = CalendarDate::new(2024, 2, 15).unwrap();
        for delta in [-400_i64, -31, -1, 0, 1, 31, 400] {
            let shifted = date.add_days(delta).unwrap();
            assert_eq!(shifted.days_until(date), -delta);
            assert_eq!(shifted.add_days(-delta).unwrap(), date);
        }
    }

    #[test]
    fn test_add_days_out_of_range() {
        let date = CalendarDate::new(9999, 11, 31).unwrap();
        assert!(date.add_days(1).is_err());
        let date = CalendarDate::new(1, 0, 1).unwrap();
        assert!(date.add_days(-1).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let date = CalendarDate::new(2024, 2, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid month
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        // Invalid day for February
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        // Valid leap day
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }
}
