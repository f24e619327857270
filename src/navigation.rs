use crate::consts::{MAX_YEAR, YEAR_PAGE_SIZE};
use crate::types::{clamp_year_floor, DisplayPeriod, ViewMode};
use crate::DateError;

/// Navigation state: the displayed period plus the active view mode.
/// Transitions are pure and return a new value; the store owns the current
/// one and swaps it on every accepted transition.
///
/// Month-by-month paging has no 1900 floor (a widget showing January 1900
/// pages back to December 1899); only the year-stepping transitions used by
/// the months and years views clamp at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub period: DisplayPeriod,
    pub view:   ViewMode,
}

impl Navigation {
    pub const fn new(period: DisplayPeriod) -> Self {
        Self { period, view: ViewMode::Days }
    }

    /// Pages the displayed month back by one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` at the edge of the representable
    /// calendar.
    pub fn previous_month(self) -> Result<Self, DateError> {
        Ok(Self {
            period: self.period.add_months(-1)?,
            ..self
        })
    }

    /// Pages the displayed month forward by one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` at the edge of the representable
    /// calendar.
    pub fn next_month(self) -> Result<Self, DateError> {
        Ok(Self {
            period: self.period.add_months(1)?,
            ..self
        })
    }

    /// Steps the displayed year back by one, clamped at the navigation floor
    pub fn previous_year(self) -> Self {
        self.step_year_clamped(-1)
    }

    /// Steps the displayed year forward by one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past the representable calendar.
    pub fn next_year(self) -> Result<Self, DateError> {
        self.step_year_checked(1)
    }

    /// Pages the displayed year back by one 25-year page, clamped at the
    /// navigation floor. Repeated paging from 1920 lands exactly on 1900.
    pub fn previous_year_page(self) -> Self {
        self.step_year_clamped(-YEAR_PAGE_SIZE)
    }

    /// Pages the displayed year forward by one 25-year page.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past the representable calendar.
    pub fn next_year_page(self) -> Result<Self, DateError> {
        self.step_year_checked(YEAR_PAGE_SIZE)
    }

    fn step_year_clamped(self, delta: i32) -> Self {
        let year = clamp_year_floor(self.period.year() + delta);
        // The floor and the current year are both valid, so this cannot fail
        match self.period.with_year(year) {
            Ok(period) => Self { period, ..self },
            Err(_) => self,
        }
    }

    fn step_year_checked(self, delta: i32) -> Result<Self, DateError> {
        let year = self.period.year() + delta;
        if year > MAX_YEAR {
            return Err(DateError::InvalidYear(year));
        }
        Ok(Self {
            period: self.period.with_year(year)?,
            ..self
        })
    }

    /// Switches to the months view, keeping the displayed year
    pub fn open_months(self) -> Self {
        Self { view: ViewMode::Months, ..self }
    }

    /// Switches to the years view
    pub fn open_years(self) -> Self {
        Self { view: ViewMode::Years, ..self }
    }

    /// Commits a month choice from the months view and returns to the days
    /// view. A no-op in any other view.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for an out-of-range month index.
    pub fn select_month(self, month: u8) -> Result<Self, DateError> {
        if self.view != ViewMode::Months {
            return Ok(self);
        }
        Ok(Self {
            period: self.period.with_month(month)?,
            view:   ViewMode::Days,
        })
    }

    /// Commits a year choice from the years view and returns to the days
    /// view. A no-op in any other view.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for an out-of-range year.
    pub fn select_year(self, year: i32) -> Result<Self, DateError> {
        if self.view != ViewMode::Years {
            return Ok(self);
        }
        Ok(Self {
            period: self.period.with_year(year)?,
            view:   ViewMode::Days,
        })
    }
}
