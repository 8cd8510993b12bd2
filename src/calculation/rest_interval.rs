//! Rest interval resolution.
//!
//! Clips a proposed rest (break) interval to the attendance start/end bounds
//! and computes the rounded rest duration.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ApplicationSettings, AttendanceBounds, AuditStep, RestInterval};

use super::time_util::minutes_between;

/// The result of resolving one rest interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestResolution {
    /// The clamped interval, unset when no rest should be recorded.
    pub interval: Option<RestInterval>,
    /// The rounded rest duration in minutes.
    pub rest_minutes: i64,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Clamps a proposed rest interval to the attendance bounds.
///
/// - If either end is missing, the interval is unset.
/// - The start is moved forward to the attendance start if that is later.
/// - The end is moved back to the attendance end if that is earlier.
/// - If the end then precedes the start, the interval collapses onto the start.
/// - A zero-length interval is not recorded.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::clamp_rest;
/// use attendance_engine::models::AttendanceBounds;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let bounds = AttendanceBounds {
///     start: Some(at("2025-04-01 12:30")),
///     end: Some(at("2025-04-01 18:00")),
/// };
///
/// let interval = clamp_rest(Some(at("2025-04-01 12:00")), Some(at("2025-04-01 13:00")), &bounds)
///     .unwrap();
/// assert_eq!(interval.start, at("2025-04-01 12:30"));
/// assert_eq!(interval.end, at("2025-04-01 13:00"));
/// ```
pub fn clamp_rest(
    rest_start: Option<NaiveDateTime>,
    rest_end: Option<NaiveDateTime>,
    bounds: &AttendanceBounds,
) -> Option<RestInterval> {
    let (mut start, mut end) = (rest_start?, rest_end?);

    if let Some(attendance_start) = bounds.start {
        if attendance_start > start {
            start = attendance_start;
        }
    }
    if let Some(attendance_end) = bounds.end {
        if attendance_end < end {
            end = attendance_end;
        }
    }
    if end < start {
        end = start;
    }

    (start != end).then_some(RestInterval { start, end })
}

/// Computes the rounded rest duration in minutes.
///
/// The start is rounded with the rest-start rule, the end with the rest-end
/// rule, and the difference is rounded with the rest-duration rule. A missing
/// end yields 0, and a negative difference is treated as 0.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DateConversion`] if rounding leaves
/// the representable calendar.
pub fn calc_rest_time(
    rest_start: Option<NaiveDateTime>,
    rest_end: Option<NaiveDateTime>,
    settings: &ApplicationSettings,
) -> EngineResult<i64> {
    let (Some(start), Some(end)) = (rest_start, rest_end) else {
        return Ok(0);
    };

    let rounded_start = settings.rest_start_rounding.round_time(start)?;
    let rounded_end = settings.rest_end_rounding.round_time(end)?;
    let minutes = minutes_between(rounded_start, rounded_end).max(0);

    Ok(settings.rest_time_rounding.round_minutes(minutes))
}

/// Resolves a rest interval against the attendance bounds.
///
/// Combines [`clamp_rest`] and [`calc_rest_time`]. The duration is computed
/// on the clamped interval; an interval that is not recorded has 0 minutes.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DateConversion`] if rounding leaves
/// the representable calendar.
pub fn resolve_rest(
    rest_start: Option<NaiveDateTime>,
    rest_end: Option<NaiveDateTime>,
    bounds: &AttendanceBounds,
    settings: &ApplicationSettings,
    step_number: u32,
) -> EngineResult<RestResolution> {
    let interval = clamp_rest(rest_start, rest_end, bounds);

    let rest_minutes = match interval {
        Some(interval) => calc_rest_time(Some(interval.start), Some(interval.end), settings)?,
        None => 0,
    };

    let reasoning = match (&interval, rest_start.zip(rest_end)) {
        (_, None) => "Rest start or end missing; no rest recorded".to_string(),
        (None, Some(_)) => "Rest lies outside attendance bounds; no rest recorded".to_string(),
        (Some(i), Some(_)) => format!(
            "Rest clamped to {} - {}, {} minutes after rounding",
            i.start, i.end, rest_minutes
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rest_interval_resolution".to_string(),
        rule_name: "Rest Interval Resolution".to_string(),
        input: serde_json::json!({
            "rest_start": rest_start,
            "rest_end": rest_end,
            "attendance_start": bounds.start,
            "attendance_end": bounds.end
        }),
        output: serde_json::json!({
            "interval": interval,
            "rest_minutes": rest_minutes
        }),
        reasoning,
    };

    Ok(RestResolution {
        interval,
        rest_minutes,
        audit_step,
    })
}
