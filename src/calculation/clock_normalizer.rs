//! Start and end time normalization.
//!
//! This module turns a raw punch into the start or end time stored on an
//! attendance record, taking the scheduled work pattern, requested overtime
//! and the configured rounding rules into account.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ApplicationSettings, AuditStep, RequestContext, ScheduledPattern};

use super::time_util::{MINUTES_PER_HOUR, offset_minutes};

/// The branch of the start-time rules that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTimeRule {
    /// Direct start: the scheduled start was used and the punch ignored.
    DirectStart,
    /// Late punch rounded with the start-punch rule.
    LateRoundedStart,
    /// Late punch rounded with the actual-start-punch rule.
    LateRoundedActual,
    /// On time, scheduled start (less requested overtime) displayed.
    ScheduledDisplay,
    /// Punch rounded with the actual-start-punch rule.
    RoundedActual,
}

/// The branch of the end-time rules that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndTimeRule {
    /// Direct end: the scheduled end was used and the punch ignored.
    DirectEnd,
    /// Early punch rounded with the end-punch rule.
    EarlyRoundedEnd,
    /// Early punch rounded with the actual-end-punch rule.
    EarlyRoundedActual,
    /// Scheduled end (plus requested overtime) displayed.
    ScheduledDisplay,
    /// Punch rounded with the actual-end-punch rule.
    RoundedActual,
}

/// The result of resolving an attendance start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartTimeResolution {
    /// The start time to record.
    pub start_time: NaiveDateTime,
    /// The punch rounded with the actual-start rule; unset for direct start
    /// or when that rounding leaves the calendar.
    pub actual_start_time: Option<NaiveDateTime>,
    /// The scheduled start less before-work overtime.
    pub adjusted_scheduled_start: NaiveDateTime,
    /// Whether automatic before-work overtime applied.
    pub auto_before_overtime: bool,
    /// Before-work overtime minutes used for the adjustment.
    pub overtime_minutes_before_work: i64,
    /// The rule branch that fired.
    pub rule: StartTimeRule,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// The result of resolving an attendance end time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTimeResolution {
    /// The end time to record.
    pub end_time: NaiveDateTime,
    /// The punch rounded with the actual-end rule; unset for direct end
    /// or when that rounding leaves the calendar.
    pub actual_end_time: Option<NaiveDateTime>,
    /// The scheduled end plus after-work overtime.
    pub adjusted_scheduled_end: NaiveDateTime,
    /// The rule branch that fired.
    pub rule: EndTimeRule,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the start time of an attendance record from a start punch.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. Direct start: the scheduled start is returned and the punch ignored.
/// 2. Before-work overtime is taken from the request context, or, when the
///    pattern enables automatic before-work overtime, recomputed as the
///    difference between the scheduled-start hour and the punch hour.
/// 3. The scheduled start is moved earlier by that overtime.
/// 4. Late (punch after the adjusted start): the punch is rounded with the
///    start-punch rule when scheduled display is on and automatic overtime
///    is off, otherwise with the actual-start-punch rule.
/// 5. Scheduled display on and automatic overtime off: the adjusted start is
///    returned unrounded.
/// 6. Otherwise the punch is rounded with the actual-start-punch rule.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DateConversion`] if the overtime
/// adjustment or rounding leaves the representable calendar.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{resolve_start_time, StartTimeRule};
/// use attendance_engine::models::{ApplicationSettings, RequestContext, ScheduledPattern};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let pattern = ScheduledPattern {
///     work_type_code: "day".to_string(),
///     scheduled_start: at("2025-04-01 09:00"),
///     scheduled_end: at("2025-04-01 18:00"),
///     direct_start: false,
///     direct_end: false,
///     prescribed_work_minutes: 480,
///     items: vec![],
/// };
/// let settings = ApplicationSettings { use_scheduled_time: true, ..Default::default() };
///
/// let result = resolve_start_time(
///     &pattern,
///     &RequestContext::default(),
///     &settings,
///     at("2025-04-01 08:41"),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.start_time, at("2025-04-01 09:00"));
/// assert_eq!(result.rule, StartTimeRule::ScheduledDisplay);
/// ```
pub fn resolve_start_time(
    pattern: &ScheduledPattern,
    request: &RequestContext,
    settings: &ApplicationSettings,
    punch_time: NaiveDateTime,
    step_number: u32,
) -> EngineResult<StartTimeResolution> {
    let scheduled_start = pattern.scheduled_start;

    if pattern.direct_start {
        let audit_step = start_audit_step(
            step_number,
            pattern,
            punch_time,
            scheduled_start,
            scheduled_start,
            StartTimeRule::DirectStart,
            "Direct start pattern: scheduled start used, punch ignored".to_string(),
        );
        return Ok(StartTimeResolution {
            start_time: scheduled_start,
            actual_start_time: None,
            adjusted_scheduled_start: scheduled_start,
            auto_before_overtime: false,
            overtime_minutes_before_work: 0,
            rule: StartTimeRule::DirectStart,
            audit_step,
        });
    }

    let auto_before_overtime = pattern.is_auto_before_overwork();

    // Whole-hour truncation on both sides, minutes are discarded.
    let overtime_minutes_before_work = if auto_before_overtime {
        (i64::from(scheduled_start.hour()) - i64::from(punch_time.hour())) * MINUTES_PER_HOUR
    } else {
        request.overtime_minutes_before_work
    };

    let adjusted_scheduled_start = offset_minutes(scheduled_start, -overtime_minutes_before_work)?;
    // Only the branches that return the actual time fail on its rounding.
    let round_actual = || settings.actual_start_rounding.round_time(punch_time);
    let scheduled_display = settings.use_scheduled_time && !auto_before_overtime;

    let (start_time, rule, reasoning) = if punch_time > adjusted_scheduled_start {
        if scheduled_display {
            (
                settings.start_rounding.round_time(punch_time)?,
                StartTimeRule::LateRoundedStart,
                format!(
                    "Punch {} is after adjusted start {}; rounded with start rule",
                    punch_time, adjusted_scheduled_start
                ),
            )
        } else {
            (
                round_actual()?,
                StartTimeRule::LateRoundedActual,
                format!(
                    "Punch {} is after adjusted start {}; rounded with actual start rule",
                    punch_time, adjusted_scheduled_start
                ),
            )
        }
    } else if scheduled_display {
        (
            adjusted_scheduled_start,
            StartTimeRule::ScheduledDisplay,
            format!(
                "Punch {} is on time; scheduled start {} less {} overtime minutes displayed",
                punch_time, scheduled_start, overtime_minutes_before_work
            ),
        )
    } else {
        (
            round_actual()?,
            StartTimeRule::RoundedActual,
            format!(
                "Punch {} is on time; rounded with actual start rule",
                punch_time
            ),
        )
    };

    let audit_step = start_audit_step(
        step_number,
        pattern,
        punch_time,
        adjusted_scheduled_start,
        start_time,
        rule,
        reasoning,
    );

    Ok(StartTimeResolution {
        start_time,
        actual_start_time: round_actual().ok(),
        adjusted_scheduled_start,
        auto_before_overtime,
        overtime_minutes_before_work,
        rule,
        audit_step,
    })
}

/// Resolves the end time of an attendance record from an end punch.
///
/// Mirrors [`resolve_start_time`]: direct end returns the scheduled end,
/// the scheduled end is extended by requested after-work overtime, an early
/// punch is rounded with the end-punch rule under scheduled display (the
/// actual-end-punch rule otherwise), scheduled display shows the adjusted
/// end, and any other punch is rounded with the actual-end-punch rule.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DateConversion`] if the overtime
/// adjustment or rounding leaves the representable calendar.
pub fn resolve_end_time(
    pattern: &ScheduledPattern,
    request: &RequestContext,
    settings: &ApplicationSettings,
    punch_time: NaiveDateTime,
    step_number: u32,
) -> EngineResult<EndTimeResolution> {
    let scheduled_end = pattern.scheduled_end;

    if pattern.direct_end {
        let audit_step = end_audit_step(
            step_number,
            punch_time,
            scheduled_end,
            scheduled_end,
            EndTimeRule::DirectEnd,
            "Direct end pattern: scheduled end used, punch ignored".to_string(),
        );
        return Ok(EndTimeResolution {
            end_time: scheduled_end,
            actual_end_time: None,
            adjusted_scheduled_end: scheduled_end,
            rule: EndTimeRule::DirectEnd,
            audit_step,
        });
    }

    let adjusted_scheduled_end = offset_minutes(scheduled_end, request.overtime_minutes_after_work)?;
    let round_actual = || settings.actual_end_rounding.round_time(punch_time);

    let (end_time, rule, reasoning) = if punch_time < adjusted_scheduled_end {
        if settings.use_scheduled_time {
            (
                settings.end_rounding.round_time(punch_time)?,
                EndTimeRule::EarlyRoundedEnd,
                format!(
                    "Punch {} is before adjusted end {}; rounded with end rule",
                    punch_time, adjusted_scheduled_end
                ),
            )
        } else {
            (
                round_actual()?,
                EndTimeRule::EarlyRoundedActual,
                format!(
                    "Punch {} is before adjusted end {}; rounded with actual end rule",
                    punch_time, adjusted_scheduled_end
                ),
            )
        }
    } else if settings.use_scheduled_time {
        (
            adjusted_scheduled_end,
            EndTimeRule::ScheduledDisplay,
            format!(
                "Punch {} is at or after adjusted end; scheduled end {} displayed",
                punch_time, adjusted_scheduled_end
            ),
        )
    } else {
        (
            round_actual()?,
            EndTimeRule::RoundedActual,
            format!("Punch {} rounded with actual end rule", punch_time),
        )
    };

    let audit_step = end_audit_step(
        step_number,
        punch_time,
        adjusted_scheduled_end,
        end_time,
        rule,
        reasoning,
    );

    Ok(EndTimeResolution {
        end_time,
        actual_end_time: round_actual().ok(),
        adjusted_scheduled_end,
        rule,
        audit_step,
    })
}

fn start_audit_step(
    step_number: u32,
    pattern: &ScheduledPattern,
    punch_time: NaiveDateTime,
    adjusted_scheduled_start: NaiveDateTime,
    start_time: NaiveDateTime,
    rule: StartTimeRule,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "start_time_resolution".to_string(),
        rule_name: "Start Time Resolution".to_string(),
        input: serde_json::json!({
            "work_type_code": pattern.work_type_code,
            "scheduled_start": pattern.scheduled_start,
            "direct_start": pattern.direct_start,
            "punch_time": punch_time
        }),
        output: serde_json::json!({
            "adjusted_scheduled_start": adjusted_scheduled_start,
            "start_time": start_time,
            "rule": rule
        }),
        reasoning,
    }
}

fn end_audit_step(
    step_number: u32,
    punch_time: NaiveDateTime,
    adjusted_scheduled_end: NaiveDateTime,
    end_time: NaiveDateTime,
    rule: EndTimeRule,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "end_time_resolution".to_string(),
        rule_name: "End Time Resolution".to_string(),
        input: serde_json::json!({
            "punch_time": punch_time
        }),
        output: serde_json::json!({
            "adjusted_scheduled_end": adjusted_scheduled_end,
            "end_time": end_time,
            "rule": rule
        }),
        reasoning,
    }
}
