use crate::config::{DurationRule, PickerConfig};
use crate::CalendarDate;
use std::collections::{HashMap, HashSet};

/// Resolved min/max range-duration bounds for one anchor date.
/// Durations are inclusive day counts; `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBounds {
    pub min: u32,
    pub max: Option<u32>,
}

impl DurationBounds {
    /// The `{0, unbounded}` bounds applied when no rule matches
    pub const PERMISSIVE: Self = Self { min: 0, max: None };

    /// True when an inclusive day-count span satisfies these bounds
    pub fn allows(self, span_days: i64) -> bool {
        span_days >= i64::from(self.min)
            && self.max.is_none_or(|max| span_days <= i64::from(max))
    }
}

/// Error type for malformed constraint configuration.
/// These are diagnostics, not failures: compilation always produces a usable
/// set, with the offending rule replaced by permissive defaults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// A per-anchor rule pair resolved to max < min.
    #[error("Conflicting duration rules for anchor {anchor}: max {max} is less than min {min}")]
    ConflictingDurations {
        anchor: CalendarDate,
        min:    u32,
        max:    u32,
    },

    /// The global default rules resolved to max < min.
    #[error("Conflicting default duration rules: max {max} is less than min {min}")]
    ConflictingDefaults { min: u32, max: u32 },
}

/// Compiled form of the host's disabled-date and range-duration
/// configuration. Built once per configuration value and queried with pure
/// predicates; a duplicate anchor in the input lists resolves last-wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintSet {
    disabled:    HashSet<i64>,
    min_rules:   HashMap<i64, u32>,
    max_rules:   HashMap<i64, u32>,
    permissive:  HashSet<i64>,
    default_min: u32,
    default_max: Option<u32>,
    min_date:    Option<CalendarDate>,
    max_date:    Option<CalendarDate>,
}

impl ConstraintSet {
    /// Compiles the constraint-relevant slice of `config`. Conflicting rules
    /// (max < min for the same anchor, or for the defaults) are reported and
    /// fall back to `DurationBounds::PERMISSIVE` rather than failing the
    /// whole compile.
    pub fn compile(config: &PickerConfig) -> (Self, Vec<ConstraintError>) {
        let mut set = Self {
            disabled: config
                .disabled_dates
                .iter()
                .map(|date| date.day_number())
                .collect(),
            min_date: config.min_date,
            max_date: config.max_date,
            ..Self::default()
        };

        let mut anchors: HashMap<i64, CalendarDate> = HashMap::new();
        match &config.min_range_duration {
            Some(DurationRule::Uniform(days)) => set.default_min = *days,
            Some(DurationRule::PerDate(rules)) => {
                for rule in rules {
                    let key = rule.date.day_number();
                    set.min_rules.insert(key, rule.duration);
                    anchors.insert(key, rule.date);
                }
            }
            None => {}
        }
        match &config.max_range_duration {
            Some(DurationRule::Uniform(days)) => set.default_max = Some(*days),
            Some(DurationRule::PerDate(rules)) => {
                for rule in rules {
                    let key = rule.date.day_number();
                    set.max_rules.insert(key, rule.duration);
                    anchors.insert(key, rule.date);
                }
            }
            None => {}
        }

        let errors = set.validate(&anchors);
        (set, errors)
    }

    fn validate(&mut self, anchors: &HashMap<i64, CalendarDate>) -> Vec<ConstraintError> {
        let mut errors = Vec::new();

        if let Some(max) = self.default_max {
            if max < self.default_min {
                errors.push(ConstraintError::ConflictingDefaults {
                    min: self.default_min,
                    max,
                });
                self.default_min = 0;
                self.default_max = None;
            }
        }

        // Effective bounds per anchor combine the anchor rule with the
        // defaults, so every anchor named by either list is checked.
        for (&key, &anchor) in anchors {
            let min = self.min_rules.get(&key).copied().unwrap_or(self.default_min);
            let Some(max) = self.max_rules.get(&key).copied().or(self.default_max) else {
                continue;
            };
            if max < min {
                errors.push(ConstraintError::ConflictingDurations { anchor, min, max });
                self.permissive.insert(key);
            }
        }

        errors
    }

    /// True iff the normalized date is a member of the disabled set
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.disabled.contains(&date.day_number())
    }

    /// True when a day tap on `date` may reach the selection engine at all:
    /// not disabled and inside the min/max date bounds. Used by the store to
    /// reject taps upstream.
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        if self.is_disabled(date) {
            return false;
        }
        if self.min_date.is_some_and(|min| date < min) {
            return false;
        }
        if self.max_date.is_some_and(|max| date > max) {
            return false;
        }
        true
    }

    /// Resolves the duration bounds for a range anchored at `anchor`:
    /// the anchor-specific rule, else the global default, else permissive.
    pub fn duration_rule_for(&self, anchor: CalendarDate) -> DurationBounds {
        let key = anchor.day_number();
        if self.permissive.contains(&key) {
            return DurationBounds::PERMISSIVE;
        }
        DurationBounds {
            min: self.min_rules.get(&key).copied().unwrap_or(self.default_min),
            max: self.max_rules.get(&key).copied().or(self.default_max),
        }
    }

    /// Whether `candidate` may complete a range anchored at `start`: it must
    /// be on or after the anchor, not disabled, and the inclusive day span
    /// must satisfy the anchor's duration bounds.
    pub fn is_range_end_selectable(&self, start: CalendarDate, candidate: CalendarDate) -> bool {
        if candidate < start || self.is_disabled(candidate) {
            return false;
        }
        let span = start.days_until(candidate) + 1;
        self.duration_rule_for(start).allows(span)
    }
}
