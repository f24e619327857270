use crate::CalendarDate;
use serde::{Deserialize, Serialize};

/// A range-duration bound tied to a specific anchor date.
/// Deserializes from host props shaped `{date, minDuration}` or
/// `{date, maxDuration}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorDuration {
    pub date: CalendarDate,
    #[serde(alias = "minDuration", alias = "maxDuration")]
    pub duration: u32,
}

/// A min or max range-duration rule: either one day count applied to every
/// anchor, or a per-anchor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationRule {
    Uniform(u32),
    PerDate(Vec<AnchorDuration>),
}

/// Host-supplied widget configuration. Field names follow the host's
/// camelCase props; every field has a default so partial configs
/// deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Month/year shown at mount; current date behavior is the host's call,
    /// so absence falls back to 2000-01 rather than reading a clock.
    pub initial_display_date: Option<CalendarDate>,
    pub selected_start_date: Option<CalendarDate>,
    pub selected_end_date: Option<CalendarDate>,
    pub allow_range_selection: bool,
    /// Layout hint for the weekday header; carried for the view layer,
    /// no effect on selection state.
    pub start_from_monday: bool,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub disabled_dates: Vec<CalendarDate>,
    pub min_range_duration: Option<DurationRule>,
    pub max_range_duration: Option<DurationRule>,
    pub enable_date_change: bool,
    pub enable_swipe: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_display_date: None,
            selected_start_date: None,
            selected_end_date: None,
            allow_range_selection: false,
            start_from_monday: false,
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            min_range_duration: None,
            max_range_duration: None,
            enable_date_change: true,
            enable_swipe: true,
        }
    }
}

impl PickerConfig {
    /// True when the constraint-relevant slice of two configs matches.
    /// The store recompiles its `ConstraintSet` only when this changes.
    pub(crate) fn same_constraints(&self, other: &Self) -> bool {
        self.min_date == other.min_date
            && self.max_date == other.max_date
            && self.disabled_dates == other.disabled_dates
            && self.min_range_duration == other.min_range_duration
            && self.max_range_duration == other.max_range_duration
    }
}
