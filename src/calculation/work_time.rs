//! Work time summary for one attendance record.
//!
//! Derives lateness, leaving early, work time and the overtime split from the
//! resolved start/end times, the rest minutes and the scheduled pattern.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ScheduledPattern};

use super::time_util::minutes_between;

/// The statutory daily working limit in minutes (8 hours).
pub const LEGAL_DAILY_LIMIT_MINUTES: i64 = 480;

/// Derived durations for one attendance record, all in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeSummary {
    /// Minutes the start is after the scheduled start.
    pub late_minutes: i64,
    /// Minutes the end is before the scheduled end.
    pub leave_early_minutes: i64,
    /// Rest minutes deducted from the span.
    pub rest_minutes: i64,
    /// Minutes worked excluding rest.
    pub work_minutes: i64,
    /// Contractual minutes for the day.
    pub prescribed_work_minutes: i64,
    /// Minutes worked beyond the contractual minutes.
    pub overtime_minutes: i64,
    /// Overtime that still falls within the legal daily limit.
    pub overtime_within_legal_minutes: i64,
    /// Overtime beyond the legal daily limit.
    pub overtime_beyond_legal_minutes: i64,
    /// The audit step recording this summary.
    pub audit_step: AuditStep,
}

/// Summarizes work time for an attendance record.
///
/// A missing start or end yields zero work and no lateness/leaving early
/// for the missing side.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::summarize_work_time;
/// use attendance_engine::models::ScheduledPattern;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let pattern = ScheduledPattern {
///     work_type_code: "day".to_string(),
///     scheduled_start: at("2025-04-01 09:00"),
///     scheduled_end: at("2025-04-01 17:00"),
///     direct_start: false,
///     direct_end: false,
///     prescribed_work_minutes: 420,
///     items: vec![],
/// };
///
/// let summary = summarize_work_time(
///     &pattern,
///     Some(at("2025-04-01 09:00")),
///     Some(at("2025-04-01 19:00")),
///     60,
///     1,
/// );
/// assert_eq!(summary.work_minutes, 540);
/// assert_eq!(summary.overtime_minutes, 120);
/// assert_eq!(summary.overtime_within_legal_minutes, 60);
/// assert_eq!(summary.overtime_beyond_legal_minutes, 60);
/// ```
pub fn summarize_work_time(
    pattern: &ScheduledPattern,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    rest_minutes: i64,
    step_number: u32,
) -> WorkTimeSummary {
    let late_minutes = match start {
        Some(start) if !pattern.direct_start => {
            minutes_between(pattern.scheduled_start, start).max(0)
        }
        _ => 0,
    };
    let leave_early_minutes = match end {
        Some(end) if !pattern.direct_end => minutes_between(end, pattern.scheduled_end).max(0),
        _ => 0,
    };

    let work_minutes = match (start, end) {
        (Some(start), Some(end)) => (minutes_between(start, end) - rest_minutes).max(0),
        _ => 0,
    };

    let prescribed = pattern.prescribed_work_minutes;
    let overtime_minutes = (work_minutes - prescribed).max(0);
    let overtime_beyond_legal_minutes =
        (work_minutes - LEGAL_DAILY_LIMIT_MINUTES).clamp(0, overtime_minutes);
    let overtime_within_legal_minutes = overtime_minutes - overtime_beyond_legal_minutes;

    let reasoning = if overtime_minutes > 0 {
        format!(
            "{} minutes worked against {} prescribed: {} overtime ({} within, {} beyond the {} minute legal limit)",
            work_minutes,
            prescribed,
            overtime_minutes,
            overtime_within_legal_minutes,
            overtime_beyond_legal_minutes,
            LEGAL_DAILY_LIMIT_MINUTES
        )
    } else {
        format!(
            "{} minutes worked against {} prescribed: no overtime",
            work_minutes, prescribed
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "work_time_summary".to_string(),
        rule_name: "Work Time Summary".to_string(),
        input: serde_json::json!({
            "start_time": start,
            "end_time": end,
            "scheduled_start": pattern.scheduled_start,
            "scheduled_end": pattern.scheduled_end,
            "rest_minutes": rest_minutes,
            "prescribed_work_minutes": prescribed
        }),
        output: serde_json::json!({
            "late_minutes": late_minutes,
            "leave_early_minutes": leave_early_minutes,
            "work_minutes": work_minutes,
            "overtime_minutes": overtime_minutes,
            "overtime_within_legal_minutes": overtime_within_legal_minutes,
            "overtime_beyond_legal_minutes": overtime_beyond_legal_minutes
        }),
        reasoning,
    };

    WorkTimeSummary {
        late_minutes,
        leave_early_minutes,
        rest_minutes,
        work_minutes,
        prescribed_work_minutes: prescribed,
        overtime_minutes,
        overtime_within_legal_minutes,
        overtime_beyond_legal_minutes,
        audit_step,
    }
}
