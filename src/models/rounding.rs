//! Rounding rules for punch times and durations.
//!
//! A rounding rule is a `(unit, direction)` pair. It is applied either to a
//! raw minute count (durations) or to the minute-of-day of a timestamp
//! (punch times).

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The direction in which a value is moved onto the rounding grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingDirection {
    /// No rounding; the value is kept as-is.
    #[default]
    None,
    /// Round down to the previous multiple of the unit.
    Down,
    /// Round up to the next multiple of the unit.
    Up,
    /// Round to the nearest multiple of the unit, ties upward.
    HalfUp,
}

/// A rounding rule made of a unit (in minutes) and a direction.
///
/// A unit of 0 or 1, or a direction of [`RoundingDirection::None`], leaves
/// minute values unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{RoundingDirection, RoundingRule};
///
/// let rule = RoundingRule::new(15, RoundingDirection::Up);
/// assert_eq!(rule.round_minutes(542), 555);
/// assert_eq!(rule.round_minutes(555), 555);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoundingRule {
    /// The rounding unit in minutes.
    #[serde(default)]
    pub unit: u32,
    /// The rounding direction.
    #[serde(default)]
    pub direction: RoundingDirection,
}

impl RoundingRule {
    /// A rule that never changes a value.
    pub const NONE: RoundingRule = RoundingRule {
        unit: 0,
        direction: RoundingDirection::None,
    };

    /// Creates a new rounding rule.
    pub fn new(unit: u32, direction: RoundingDirection) -> Self {
        Self { unit, direction }
    }

    fn is_noop(&self) -> bool {
        self.unit <= 1 || self.direction == RoundingDirection::None
    }

    /// Rounds a minute count onto this rule's grid.
    pub fn round_minutes(&self, minutes: i64) -> i64 {
        if self.is_noop() {
            return minutes;
        }
        let unit = i64::from(self.unit);
        let remainder = minutes.rem_euclid(unit);
        if remainder == 0 {
            return minutes;
        }
        let floor = minutes - remainder;
        match self.direction {
            RoundingDirection::None => minutes,
            RoundingDirection::Down => floor,
            RoundingDirection::Up => floor + unit,
            RoundingDirection::HalfUp => {
                if remainder * 2 >= unit {
                    floor + unit
                } else {
                    floor
                }
            }
        }
    }

    /// Rounds the time-of-day of a timestamp onto this rule's grid.
    ///
    /// Seconds are always truncated. The rounded minute-of-day is re-anchored
    /// on the timestamp's own calendar day, so rounding up past midnight
    /// rolls into the following day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateConversion`] if the rounded value falls
    /// outside the representable calendar.
    pub fn round_time(&self, time: NaiveDateTime) -> EngineResult<NaiveDateTime> {
        let truncated = time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(|| EngineError::date_conversion(format!("cannot truncate {}", time)))?;
        if self.is_noop() {
            return Ok(truncated);
        }

        let minute_of_day = i64::from(truncated.hour() * 60 + truncated.minute());
        let rounded = self.round_minutes(minute_of_day);
        let midnight = truncated.date().and_time(NaiveTime::MIN);

        midnight
            .checked_add_signed(Duration::minutes(rounded))
            .ok_or_else(|| {
                EngineError::date_conversion(format!(
                    "rounding {} to {} minutes overflows the calendar",
                    time, rounded
                ))
            })
    }
}
