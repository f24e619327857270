use crate::constraints::ConstraintSet;
use crate::prelude::*;
use crate::CalendarDate;

/// Which end of the selection an accepted day tap changed.
/// Forwarded to the host's date-change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateChangeKind {
    #[display(fmt = "START_DATE")]
    StartDate,
    #[display(fmt = "END_DATE")]
    EndDate,
}

/// The current date selection. `Range { end: None }` is a pending range:
/// the start is anchored and the next accepted tap tries to complete it.
/// A complete range always has `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Single(CalendarDate),
    Range {
        start: CalendarDate,
        end:   Option<CalendarDate>,
    },
}

impl Selection {
    /// The selected start date, if any
    pub const fn start_date(self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::Single(date) | Self::Range { start: date, .. } => Some(date),
        }
    }

    /// The selected end date, if a range is complete
    pub const fn end_date(self) -> Option<CalendarDate> {
        match self {
            Self::Range { end, .. } => end,
            Self::Empty | Self::Single(_) => None,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Applies a day tap and returns the next selection plus the signal to
    /// emit. The caller has already rejected disabled and out-of-bounds
    /// candidates; only range-end selectability is decided here.
    ///
    /// With range selection off the tap always replaces the whole selection.
    /// With it on, a pending range completes when the candidate passes the
    /// end-selectability check, and otherwise the candidate re-anchors a new
    /// pending range (a disqualified end becomes the new start).
    pub fn select_day(
        self,
        candidate: CalendarDate,
        allow_range: bool,
        constraints: &ConstraintSet,
    ) -> (Self, DateChangeKind) {
        if !allow_range {
            return (Self::Single(candidate), DateChangeKind::StartDate);
        }
        match self {
            Self::Range { start, end: None }
                if constraints.is_range_end_selectable(start, candidate) =>
            {
                (
                    Self::Range { start, end: Some(candidate) },
                    DateChangeKind::EndDate,
                )
            }
            _ => (
                Self::Range { start: candidate, end: None },
                DateChangeKind::StartDate,
            ),
        }
    }

    /// Unconditionally clears the selection
    pub const fn reset(self) -> Self {
        Self::Empty
    }

    /// Builds a selection from externally supplied start/end props.
    /// Returns `None` for a malformed pair (end without start, or end before
    /// start) so the caller can keep its prior state untouched.
    pub fn from_parts(
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
        allow_range: bool,
    ) -> Option<Self> {
        match (start, end) {
            (None, None) => Some(Self::Empty),
            (None, Some(_)) => None,
            (Some(start), None) => {
                if allow_range {
                    Some(Self::Range { start, end: None })
                } else {
                    Some(Self::Single(start))
                }
            }
            (Some(start), Some(end)) => {
                if !allow_range {
                    return Some(Self::Single(start));
                }
                if end < start {
                    return None;
                }
                Some(Self::Range { start, end: Some(end) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DurationRule, PickerConfig};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn no_constraints() -> ConstraintSet {
        ConstraintSet::compile(&PickerConfig::default()).0
    }

    #[test]
    fn test_single_mode_always_replaces() {
        let constraints = no_constraints();
        let (selection, kind) =
            Selection::Empty.select_day(date("2024-03-10"), false, &constraints);
        assert_eq!(selection, Selection::Single(date("2024-03-10")));
        assert_eq!(kind, DateChangeKind::StartDate);

        let (selection, kind) = selection.select_day(date("2024-03-20"), false, &constraints);
        assert_eq!(selection, Selection::Single(date("2024-03-20")));
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_range_round_trip_and_reanchor() {
        let constraints = no_constraints();
        let d1 = date("2024-03-10");
        let d2 = date("2024-03-14");
        let d3 = date("2024-03-20");

        let (selection, kind) = Selection::Empty.select_day(d1, true, &constraints);
        assert_eq!(selection, Selection::Range { start: d1, end: None });
        assert_eq!(kind, DateChangeKind::StartDate);

        let (selection, kind) = selection.select_day(d2, true, &constraints);
        assert_eq!(selection, Selection::Range { start: d1, end: Some(d2) });
        assert_eq!(kind, DateChangeKind::EndDate);

        // A tap on a complete range starts over
        let (selection, kind) = selection.select_day(d3, true, &constraints);
        assert_eq!(selection, Selection::Range { start: d3, end: None });
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_range_same_day_completes() {
        let constraints = no_constraints();
        let d1 = date("2024-03-10");
        let (selection, _) = Selection::Empty.select_day(d1, true, &constraints);
        let (selection, kind) = selection.select_day(d1, true, &constraints);
        assert_eq!(selection, Selection::Range { start: d1, end: Some(d1) });
        assert_eq!(kind, DateChangeKind::EndDate);
    }

    #[test]
    fn test_candidate_before_start_reanchors() {
        let constraints = no_constraints();
        let (selection, _) = Selection::Empty.select_day(date("2024-03-10"), true, &constraints);
        let earlier = date("2024-03-05");
        let (selection, kind) = selection.select_day(earlier, true, &constraints);
        assert_eq!(selection, Selection::Range { start: earlier, end: None });
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_min_duration_violation_reanchors() {
        let config = PickerConfig {
            min_range_duration: Some(DurationRule::Uniform(3)),
            ..PickerConfig::default()
        };
        let (constraints, _) = ConstraintSet::compile(&config);
        let d1 = date("2024-03-10");
        let next_day = date("2024-03-11");

        let (selection, _) = Selection::Empty.select_day(d1, true, &constraints);
        let (selection, kind) = selection.select_day(next_day, true, &constraints);
        assert_eq!(selection, Selection::Range { start: next_day, end: None });
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_disabled_end_reanchors() {
        let blocked = date("2024-03-12");
        let config = PickerConfig {
            disabled_dates: vec![blocked],
            ..PickerConfig::default()
        };
        let (constraints, _) = ConstraintSet::compile(&config);

        let (selection, _) = Selection::Empty.select_day(date("2024-03-10"), true, &constraints);
        let (selection, kind) = selection.select_day(blocked, true, &constraints);
        assert_eq!(selection, Selection::Range { start: blocked, end: None });
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_single_to_pending_range_when_mode_enabled() {
        let constraints = no_constraints();
        let single = Selection::Single(date("2024-03-01"));
        let (selection, kind) = single.select_day(date("2024-03-10"), true, &constraints);
        assert_eq!(
            selection,
            Selection::Range { start: date("2024-03-10"), end: None }
        );
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_stale_range_collapses_on_next_tap_when_mode_disabled() {
        // Toggling range mode off leaves the stored range untouched until
        // the next tap, which replaces it with a single date.
        let constraints = no_constraints();
        let stale = Selection::Range {
            start: date("2024-03-10"),
            end:   Some(date("2024-03-14")),
        };
        let (selection, kind) = stale.select_day(date("2024-03-20"), false, &constraints);
        assert_eq!(selection, Selection::Single(date("2024-03-20")));
        assert_eq!(kind, DateChangeKind::StartDate);
    }

    #[test]
    fn test_reset_idempotent() {
        let selection = Selection::Range {
            start: date("2024-03-10"),
            end:   Some(date("2024-03-14")),
        };
        let once = selection.reset();
        let twice = once.reset();
        assert_eq!(once, Selection::Empty);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_parts() {
        let start = date("2024-03-10");
        let end = date("2024-03-14");

        assert_eq!(Selection::from_parts(None, None, true), Some(Selection::Empty));
        assert_eq!(
            Selection::from_parts(Some(start), None, true),
            Some(Selection::Range { start, end: None })
        );
        assert_eq!(
            Selection::from_parts(Some(start), Some(end), true),
            Some(Selection::Range { start, end: Some(end) })
        );
        // Range props collapse to a single date when range mode is off
        assert_eq!(
            Selection::from_parts(Some(start), Some(end), false),
            Some(Selection::Single(start))
        );
        // Malformed pairs are rejected
        assert_eq!(Selection::from_parts(Some(end), Some(start), true), None);
        assert_eq!(Selection::from_parts(None, Some(end), true), None);
    }

    #[test]
    fn test_accessors() {
        let start = date("2024-03-10");
        let end = date("2024-03-14");
        assert_eq!(Selection::Empty.start_date(), None);
        assert_eq!(Selection::Single(start).start_date(), Some(start));
        let range = Selection::Range { start, end: Some(end) };
        assert_eq!(range.start_date(), Some(start));
        assert_eq!(range.end_date(), Some(end));
        assert!(!range.is_empty());
        assert!(Selection::Empty.is_empty());
    }
}
