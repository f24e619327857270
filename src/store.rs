use crate::config::PickerConfig;
use crate::constraints::{ConstraintError, ConstraintSet};
use crate::navigation::Navigation;
use crate::selection::{DateChangeKind, Selection};
use crate::types::{DisplayPeriod, SwipeDirection, ViewMode};
use crate::{CalendarDate, DateError};

/// Immutable snapshot of everything the view layer needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub period:    DisplayPeriod,
    pub view:      ViewMode,
    pub selection: Selection,
}

/// Externally supplied props for `apply_external_sync`. Each field is
/// compared against the value from the previous sync; only fields that
/// changed overwrite internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExternalSync {
    pub initial_display_date: Option<CalendarDate>,
    pub selected_start_date:  Option<CalendarDate>,
    pub selected_end_date:    Option<CalendarDate>,
}

type DateChangeHandler = Box<dyn FnMut(CalendarDate, DateChangeKind)>;
type MonthChangeHandler = Box<dyn FnMut(DisplayPeriod)>;

/// Owns the canonical picker state and applies input events to it.
///
/// All transitions run synchronously to completion; every accepted selection
/// transition invokes the optional date-change handler and every month-page
/// transition invokes the optional month-change handler. Both handlers
/// default to doing nothing.
pub struct PickerStateStore {
    config:            PickerConfig,
    constraints:       ConstraintSet,
    constraint_errors: Vec<ConstraintError>,
    navigation:        Navigation,
    selection:         Selection,
    last_sync:         ExternalSync,
    on_date_change:    Option<DateChangeHandler>,
    on_month_change:   Option<MonthChangeHandler>,
}

impl PickerStateStore {
    /// Builds a store from host configuration, seeding the displayed period
    /// from `initial_display_date` and the selection from the pre-selected
    /// start/end props. Malformed constraint rules are collected (see
    /// `constraint_errors`) rather than failing the mount.
    pub fn new(config: PickerConfig) -> Self {
        let (constraints, constraint_errors) = ConstraintSet::compile(&config);
        let period = config
            .initial_display_date
            .map_or_else(DisplayPeriod::default, DisplayPeriod::from);
        let selection = Selection::from_parts(
            config.selected_start_date,
            config.selected_end_date,
            config.allow_range_selection,
        )
        .unwrap_or_default();
        let last_sync = ExternalSync {
            initial_display_date: config.initial_display_date,
            selected_start_date:  config.selected_start_date,
            selected_end_date:    config.selected_end_date,
        };

        Self {
            config,
            constraints,
            constraint_errors,
            navigation: Navigation::new(period),
            selection,
            last_sync,
            on_date_change: None,
            on_month_change: None,
        }
    }

    /// Registers the handler invoked on every accepted selection transition
    pub fn set_on_date_change(
        &mut self,
        handler: impl FnMut(CalendarDate, DateChangeKind) + 'static,
    ) {
        self.on_date_change = Some(Box::new(handler));
    }

    /// Registers the handler invoked after every month-page transition
    pub fn set_on_month_change(&mut self, handler: impl FnMut(DisplayPeriod) + 'static) {
        self.on_month_change = Some(Box::new(handler));
    }

    /// Read-only state snapshot for the display layer
    pub fn snapshot(&self) -> PickerState {
        PickerState {
            period:    self.navigation.period,
            view:      self.navigation.view,
            selection: self.selection,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Diagnostics from the most recent constraint compile
    pub fn constraint_errors(&self) -> &[ConstraintError] {
        &self.constraint_errors
    }

    /// Handles a tap on day `day` of the displayed month. Silently ignored
    /// when date changes are disabled or the date is disabled/out of bounds.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the
    /// displayed month.
    pub fn on_press_day(&mut self, day: u8) -> Result<(), DateError> {
        if !self.config.enable_date_change {
            return Ok(());
        }
        let date = self.navigation.period.date_for_day(day)?;
        if !self.constraints.is_selectable(date) {
            return Ok(());
        }
        let (selection, kind) = self.selection.select_day(
            date,
            self.config.allow_range_selection,
            &self.constraints,
        );
        self.selection = selection;
        if let Some(handler) = &mut self.on_date_change {
            handler(date, kind);
        }
        Ok(())
    }

    /// Handles a tap on the month label: opens the months view
    pub fn on_press_month(&mut self) {
        self.navigation = self.navigation.open_months();
    }

    /// Handles a tap on the year label: opens the years view
    pub fn on_press_year(&mut self) {
        self.navigation = self.navigation.open_years();
    }

    /// Commits a month chosen in the months view. Ignored when date changes
    /// are disabled or the months view is not active.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for an out-of-range month index.
    pub fn on_select_month(&mut self, month: u8) -> Result<(), DateError> {
        if !self.config.enable_date_change {
            return Ok(());
        }
        self.navigation = self.navigation.select_month(month)?;
        Ok(())
    }

    /// Commits a year chosen in the years view. Ignored when date changes
    /// are disabled or the years view is not active.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for an out-of-range year.
    pub fn on_select_year(&mut self, year: i32) -> Result<(), DateError> {
        if !self.config.enable_date_change {
            return Ok(());
        }
        self.navigation = self.navigation.select_year(year)?;
        Ok(())
    }

    /// Pages the displayed month back and signals the month change.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` at the edge of the representable
    /// calendar.
    pub fn on_press_previous(&mut self) -> Result<(), DateError> {
        self.navigation = self.navigation.previous_month()?;
        self.notify_month_change();
        Ok(())
    }

    /// Pages the displayed month forward and signals the month change.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` at the edge of the representable
    /// calendar.
    pub fn on_press_next(&mut self) -> Result<(), DateError> {
        self.navigation = self.navigation.next_month()?;
        self.notify_month_change();
        Ok(())
    }

    /// Steps the year back in the months view (clamped at the floor)
    pub fn on_month_view_previous(&mut self) {
        self.navigation = self.navigation.previous_year();
    }

    /// Steps the year forward in the months view.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past the representable calendar.
    pub fn on_month_view_next(&mut self) -> Result<(), DateError> {
        self.navigation = self.navigation.next_year()?;
        Ok(())
    }

    /// Pages the years view back by one page (clamped at the floor)
    pub fn on_year_view_previous(&mut self) {
        self.navigation = self.navigation.previous_year_page();
    }

    /// Pages the years view forward by one page.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past the representable calendar.
    pub fn on_year_view_next(&mut self) -> Result<(), DateError> {
        self.navigation = self.navigation.next_year_page()?;
        Ok(())
    }

    /// Maps a swipe to month paging: left pages forward, right pages back.
    /// Ignored when swipe navigation is disabled.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` at the edge of the representable
    /// calendar.
    pub fn on_swipe(&mut self, direction: SwipeDirection) -> Result<(), DateError> {
        if !self.config.enable_swipe {
            return Ok(());
        }
        match direction {
            SwipeDirection::Left => self.on_press_next(),
            SwipeDirection::Right => self.on_press_previous(),
        }
    }

    /// Clears the selection
    pub fn reset_selections(&mut self) {
        self.selection = self.selection.reset();
    }

    /// Applies a host prop update: each field that differs from the last
    /// externally supplied value overwrites the corresponding internal
    /// state (host wins on change, hands-off otherwise). A malformed
    /// selection pair leaves prior selection state untouched.
    pub fn apply_external_sync(&mut self, sync: ExternalSync) {
        if sync.initial_display_date != self.last_sync.initial_display_date {
            if let Some(date) = sync.initial_display_date {
                self.navigation.period = DisplayPeriod::from(date);
            }
            self.last_sync.initial_display_date = sync.initial_display_date;
        }

        let selection_changed = sync.selected_start_date != self.last_sync.selected_start_date
            || sync.selected_end_date != self.last_sync.selected_end_date;
        if selection_changed {
            if let Some(selection) = Selection::from_parts(
                sync.selected_start_date,
                sync.selected_end_date,
                self.config.allow_range_selection,
            ) {
                self.selection = selection;
                self.last_sync.selected_start_date = sync.selected_start_date;
                self.last_sync.selected_end_date = sync.selected_end_date;
            }
        }
    }

    /// Replaces the configuration. The compiled constraint set is rebuilt
    /// only when the constraint-relevant slice of the config changed.
    pub fn update_config(&mut self, config: PickerConfig) {
        if !config.same_constraints(&self.config) {
            let (constraints, errors) = ConstraintSet::compile(&config);
            self.constraints = constraints;
            self.constraint_errors = errors;
        }
        self.config = config;
    }

    fn notify_month_change(&mut self) {
        if let Some(handler) = &mut self.on_month_change {
            handler(self.navigation.period);
        }
    }
}
