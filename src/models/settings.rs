//! Application settings, scheduled work patterns and request context.
//!
//! These are the read-only inputs supplied by the settings provider for one
//! employee on one work date.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::RoundingRule;

/// Work-type item code for the "auto before-work overtime" feature.
pub const AUTO_BEFORE_OVERWORK_ITEM: &str = "auto_before_overwork";

/// The inactivate-flag sentinel compared against an item's preliminary flag.
///
/// An item whose preliminary flag equals this value is treated as enabled.
pub const INACTIVATE_FLAG_OFF: &str = "0";

/// Effective attendance settings for an employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ApplicationSettings, RoundingRule};
///
/// let settings = ApplicationSettings::default();
/// assert!(!settings.use_scheduled_time);
/// assert_eq!(settings.start_rounding, RoundingRule::NONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    /// Whether scheduled times are shown instead of punches for on-time days.
    pub use_scheduled_time: bool,
    /// Rounding for the recorded start time.
    pub start_rounding: RoundingRule,
    /// Rounding for the actual start punch.
    pub actual_start_rounding: RoundingRule,
    /// Rounding for the recorded end time.
    pub end_rounding: RoundingRule,
    /// Rounding for the actual end punch.
    pub actual_end_rounding: RoundingRule,
    /// Rounding for rest start times.
    pub rest_start_rounding: RoundingRule,
    /// Rounding for rest end times.
    pub rest_end_rounding: RoundingRule,
    /// Rounding for the rest duration.
    pub rest_time_rounding: RoundingRule,
}

/// A configurable item attached to a work type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeItem {
    /// The item code (e.g. [`AUTO_BEFORE_OVERWORK_ITEM`]).
    pub code: String,
    /// The preliminary flag value.
    pub preliminary: String,
}

/// The scheduled work pattern for one employee on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPattern {
    /// The work-type code this pattern was built from.
    pub work_type_code: String,
    /// The scheduled start of work.
    pub scheduled_start: NaiveDateTime,
    /// The scheduled end of work.
    pub scheduled_end: NaiveDateTime,
    /// No start punch is expected; the scheduled start is authoritative.
    #[serde(default)]
    pub direct_start: bool,
    /// No end punch is expected; the scheduled end is authoritative.
    #[serde(default)]
    pub direct_end: bool,
    /// Contractual working minutes for the day.
    pub prescribed_work_minutes: i64,
    /// Additional work-type items.
    #[serde(default)]
    pub items: Vec<WorkTypeItem>,
}

impl ScheduledPattern {
    /// Looks up a work-type item by code.
    pub fn item(&self, code: &str) -> Option<&WorkTypeItem> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Returns true when automatic before-work overtime is configured.
    ///
    /// The preliminary flag is compared against [`INACTIVATE_FLAG_OFF`].
    pub fn is_auto_before_overwork(&self) -> bool {
        self.item(AUTO_BEFORE_OVERWORK_ITEM)
            .is_some_and(|item| item.preliminary == INACTIVATE_FLAG_OFF)
    }
}

/// Overtime already requested for the work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    /// Minutes of overtime requested before the scheduled start.
    pub overtime_minutes_before_work: i64,
    /// Minutes of overtime requested after the scheduled end.
    pub overtime_minutes_after_work: i64,
}
