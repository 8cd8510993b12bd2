//! Minute arithmetic helpers shared by the calculators.

use chrono::{Duration, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Shifts a timestamp by a signed number of minutes.
///
/// # Errors
///
/// Returns [`EngineError::DateConversion`] if the result falls outside the
/// representable calendar.
pub fn offset_minutes(time: NaiveDateTime, minutes: i64) -> EngineResult<NaiveDateTime> {
    Duration::try_minutes(minutes)
        .and_then(|delta| time.checked_add_signed(delta))
        .ok_or_else(|| {
            EngineError::date_conversion(format!("cannot offset {} by {} minutes", time, minutes))
        })
}

/// Whole minutes from `from` to `to` (negative if `to` is earlier).
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}
