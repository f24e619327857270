use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH_INDEX, MAX_YEAR, MIN_YEAR, YEAR_NAVIGATION_FLOOR,
};
use crate::prelude::*;
use crate::{CalendarDate, DateError};
use std::fmt;

/// The month/year pair the widget is currently displaying.
/// The month is always a normalized 0-based index; `add_months` carries and
/// borrows into the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayPeriod {
    year:  i32,
    month: u8,
}

impl DisplayPeriod {
    /// Creates a period from a year and a 0-based month index.
    ///
    /// # Errors
    /// Returns `DateError` if the year or month index is out of range.
    pub fn new(year: i32, month: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month > MAX_MONTH_INDEX {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month index
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Shifts the period by `delta` whole months, borrowing or carrying the
    /// year as the month leaves `0..=11`. There is no 1900 floor here; only
    /// the representable calendar range bounds the result.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the resulting year would leave
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn add_months(self, delta: i32) -> Result<Self, DateError> {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        let year = total.div_euclid(12);
        // Normalized by construction, always in [0, 11]
        let month = total.rem_euclid(12) as u8;
        match i32::try_from(year) {
            Ok(year) => Self::new(year, month),
            Err(_) => Err(DateError::InvalidYear(if year > 0 { MAX_YEAR + 1 } else { MIN_YEAR - 1 })),
        }
    }

    /// Replaces the year, keeping the month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year` is out of range.
    pub fn with_year(self, year: i32) -> Result<Self, DateError> {
        Self::new(year, self.month)
    }

    /// Replaces the month index, keeping the year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is out of range.
    pub fn with_month(self, month: u8) -> Result<Self, DateError> {
        Self::new(self.year, month)
    }

    /// Resolves a day-of-month tap against this period into a full date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the
    /// displayed month.
    pub fn date_for_day(self, day: u8) -> Result<CalendarDate, DateError> {
        CalendarDate::new(self.year, self.month, day)
    }
}

impl Default for DisplayPeriod {
    /// Mount fallback when the host supplies no initial display date.
    /// Reading a clock is the host's business, not this crate's.
    fn default() -> Self {
        Self { year: 2000, month: 0 }
    }
}

impl From<CalendarDate> for DisplayPeriod {
    fn from(date: CalendarDate) -> Self {
        // A valid date always carries a valid period
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for DisplayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Which granularity the widget is currently displaying for selection.
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ViewMode {
    #[default]
    Days,
    Months,
    Years,
}

/// Horizontal swipe reported by the gesture layer.
/// Left pages forward, right pages back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SwipeDirection {
    Left,
    Right,
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a month given a 0-based month index
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month <= MAX_MONTH_INDEX);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Clamps a year to the navigation floor used by year-paging transitions
pub const fn clamp_year_floor(year: i32) -> i32 {
    if year < YEAR_NAVIGATION_FLOOR {
        YEAR_NAVIGATION_FLOOR
    } else {
        year
    }
}
