//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the attendance and
//! leave endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::RequestContext;
use crate::service::{AttendanceRegistration, RestPunch};

/// Request body for the `/attendance/register` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAttendanceRequest {
    /// The employee.
    pub employee_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// The work occurrence counter (defaults to 1).
    #[serde(default = "default_times_work")]
    pub times_work: u32,
    /// Start punch.
    #[serde(default)]
    pub start_punch: Option<NaiveDateTime>,
    /// End punch.
    #[serde(default)]
    pub end_punch: Option<NaiveDateTime>,
    /// Rest punches in slot order.
    #[serde(default)]
    pub rests: Vec<RestRequest>,
    /// Minutes of overtime requested before work.
    #[serde(default)]
    pub overtime_minutes_before_work: i64,
    /// Minutes of overtime requested after work.
    #[serde(default)]
    pub overtime_minutes_after_work: i64,
}

fn default_times_work() -> u32 {
    1
}

/// A rest punch pair in a registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestRequest {
    /// Rest start punch.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// Rest end punch.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl From<RestRequest> for RestPunch {
    fn from(req: RestRequest) -> Self {
        RestPunch {
            start: req.start,
            end: req.end,
        }
    }
}

impl From<RegisterAttendanceRequest> for AttendanceRegistration {
    fn from(req: RegisterAttendanceRequest) -> Self {
        AttendanceRegistration {
            employee_id: req.employee_id,
            work_date: req.work_date,
            times_work: req.times_work,
            start_punch: req.start_punch,
            end_punch: req.end_punch,
            rests: req.rests.into_iter().map(Into::into).collect(),
            request: RequestContext {
                overtime_minutes_before_work: req.overtime_minutes_before_work,
                overtime_minutes_after_work: req.overtime_minutes_after_work,
            },
        }
    }
}

/// Request body for the `/leave/carryover` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarryoverRequest {
    /// The employee.
    pub employee_id: String,
    /// The acquisition date of the new grant cycle.
    pub acquisition_date: NaiveDate,
    /// Count only fully approved requests as consumed.
    #[serde(default = "default_only_approved")]
    pub only_approved: bool,
}

fn default_only_approved() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "work_date": "2025-04-01",
            "start_punch": "2025-04-01T08:55:00"
        }"#;
        let req: RegisterAttendanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.times_work, 1);
        assert!(req.end_punch.is_none());
        assert!(req.rests.is_empty());

        let registration: AttendanceRegistration = req.into();
        assert_eq!(registration.request, RequestContext::default());
    }

    #[test]
    fn test_register_request_converts_rests_and_overtime() {
        let json = r#"{
            "employee_id": "emp_001",
            "work_date": "2025-04-01",
            "rests": [{"start": "2025-04-01T12:00:00", "end": "2025-04-01T13:00:00"}, {}],
            "overtime_minutes_before_work": 30
        }"#;
        let req: RegisterAttendanceRequest = serde_json::from_str(json).unwrap();
        let registration: AttendanceRegistration = req.into();

        assert_eq!(registration.rests.len(), 2);
        assert!(registration.rests[1].start.is_none());
        assert_eq!(registration.request.overtime_minutes_before_work, 30);
    }

    #[test]
    fn test_carryover_request_defaults_to_only_approved() {
        let json = r#"{"employee_id": "emp_001", "acquisition_date": "2025-04-01"}"#;
        let req: CarryoverRequest = serde_json::from_str(json).unwrap();
        assert!(req.only_approved);
    }
}
