//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure calculation functions: start and end time
//! normalization, rest interval resolution, work time summaries, leave
//! carryover and the request status filter used by carryover.

mod clock_normalizer;
mod leave_carryover;
mod request_status;
mod rest_interval;
mod time_util;
mod work_time;

pub use clock_normalizer::{
    EndTimeResolution, EndTimeRule, StartTimeResolution, StartTimeRule, resolve_end_time,
    resolve_start_time,
};
pub use leave_carryover::{
    CarryoverBalance, HOURS_PER_DAY, calculate_carryover, carryover, compute_carryover,
    convert_hours_to_days, format_days,
};
pub use request_status::{is_consumed, is_consumed_opt};
pub use rest_interval::{RestResolution, calc_rest_time, clamp_rest, resolve_rest};
pub use time_util::{MINUTES_PER_HOUR, minutes_between, offset_minutes};
pub use work_time::{LEGAL_DAILY_LIMIT_MINUTES, WorkTimeSummary, summarize_work_time};
