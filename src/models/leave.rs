//! Leave grant, transaction and request models.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An automatic grant of paid holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveGrantEntry {
    /// The employee the grant belongs to.
    pub employee_id: String,
    /// The date the grant was acquired.
    pub acquisition_date: NaiveDate,
    /// Days held by this grant.
    pub hold_days: Decimal,
    /// Hours held by this grant.
    #[serde(default)]
    pub hold_hours: i32,
    /// The date the grant expires.
    pub limit_date: NaiveDate,
}

/// A manual grant or cancellation of paid holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTransaction {
    /// The employee the adjustment belongs to.
    pub employee_id: String,
    /// The acquisition date the adjustment is anchored on.
    pub acquisition_date: NaiveDate,
    /// Days granted manually.
    #[serde(default)]
    pub giving_days: Decimal,
    /// Hours granted manually.
    #[serde(default)]
    pub giving_hours: i32,
    /// Days cancelled manually.
    #[serde(default)]
    pub cancel_days: Decimal,
    /// Hours cancelled manually.
    #[serde(default)]
    pub cancel_hours: i32,
}

/// The kind of leave a request consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid holiday (annual leave).
    PaidHoliday,
    /// Special holiday.
    SpecialHoliday,
    /// Other holiday.
    OtherHoliday,
    /// Absence.
    Absence,
}

/// The portion of the day a leave request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveRange {
    /// The whole day.
    FullDay,
    /// The morning half.
    HalfDayAm,
    /// The afternoon half.
    HalfDayPm,
    /// A number of hours.
    Hourly,
}

/// An employee's request to consume leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Request identifier.
    pub request_id: String,
    /// The employee making the request.
    pub employee_id: String,
    /// The date the leave is taken.
    pub acquisition_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// The range of the day covered.
    pub range: LeaveRange,
    /// Requested hours for hourly requests.
    #[serde(default)]
    pub requested_hours: u32,
    /// The workflow tracking this request's approval.
    pub workflow_id: u64,
}

/// Which carryover figure to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryoverField {
    /// Carried-over days.
    Days,
    /// Carried-over hours.
    Hours,
}

/// The prior grant cycle for an acquisition date.
///
/// Spans `[acquisition_date - 1 year, acquisition_date - 1 day]` inclusive.
///
/// # Example
///
/// ```
/// use attendance_engine::models::LeaveWindow;
/// use chrono::NaiveDate;
///
/// let window = LeaveWindow::prior_cycle(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl LeaveWindow {
    /// Builds the prior grant cycle for an acquisition date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateConversion`] if either bound falls outside
    /// the representable calendar.
    pub fn prior_cycle(acquisition_date: NaiveDate) -> EngineResult<Self> {
        let start = acquisition_date
            .checked_sub_months(Months::new(12))
            .ok_or_else(|| {
                EngineError::date_conversion(format!(
                    "cannot go back one year from {}",
                    acquisition_date
                ))
            })?;
        let end = acquisition_date
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| {
                EngineError::date_conversion(format!(
                    "cannot go back one day from {}",
                    acquisition_date
                ))
            })?;
        Ok(Self { start, end })
    }

    /// Returns true if the date lies inside the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = LeaveWindow::prior_cycle(make_date("2025-04-01")).unwrap();
        assert!(window.contains(make_date("2024-04-01")));
        assert!(window.contains(make_date("2025-03-31")));
        assert!(!window.contains(make_date("2024-03-31")));
        assert!(!window.contains(make_date("2025-04-01")));
    }

    #[test]
    fn test_window_from_leap_day_clamps_to_month_end() {
        let window = LeaveWindow::prior_cycle(make_date("2024-02-29")).unwrap();
        assert_eq!(window.start, make_date("2023-02-28"));
        assert_eq!(window.end, make_date("2024-02-28"));
    }

    #[test]
    fn test_window_at_calendar_minimum_fails() {
        let result = LeaveWindow::prior_cycle(NaiveDate::MIN);
        assert!(matches!(result, Err(EngineError::DateConversion { .. })));
    }

    #[test]
    fn test_leave_request_deserializes() {
        let yaml = r#"
request_id: req_001
employee_id: emp_001
acquisition_date: 2024-10-01
leave_type: paid_holiday
range: half_day_am
workflow_id: 7
"#;
        let request: LeaveRequest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(request.range, LeaveRange::HalfDayAm);
        assert_eq!(request.requested_hours, 0);
    }
}
