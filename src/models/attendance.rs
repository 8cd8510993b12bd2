//! Attendance and rest interval records.
//!
//! Records are identified by natural keys ([`AttendanceKey`], [`RestKey`])
//! and are only ever replaced as a whole through the history ledger.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Natural key of an attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceKey {
    /// The employee identifier.
    pub employee_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// The work occurrence counter for multi-shift days (starts at 1).
    pub times_work: u32,
}

impl fmt::Display for AttendanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.employee_id, self.work_date, self.times_work)
    }
}

/// Natural key of a rest interval record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestKey {
    /// The attendance record this rest belongs to.
    pub attendance: AttendanceKey,
    /// The rest slot number within the work occurrence.
    pub rest_slot: u32,
}

impl fmt::Display for RestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/rest{}", self.attendance, self.rest_slot)
    }
}

/// The resolved start and end of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceBounds {
    /// The resolved start time, if any.
    pub start: Option<NaiveDateTime>,
    /// The resolved end time, if any.
    pub end: Option<NaiveDateTime>,
}

/// A rest interval with both ends known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestInterval {
    /// Start of the rest.
    pub start: NaiveDateTime,
    /// End of the rest.
    pub end: NaiveDateTime,
}

impl RestInterval {
    /// Length of the interval in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// One employee's resolved and derived time figures for one work occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee identifier.
    pub employee_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// The work occurrence counter.
    pub times_work: u32,
    /// The work type applied on this day.
    pub work_type_code: String,
    /// Whether the start came from a direct-start pattern.
    pub direct_start: bool,
    /// Whether the end came from a direct-end pattern.
    pub direct_end: bool,
    /// The recorded start time.
    pub start_time: Option<NaiveDateTime>,
    /// The actual start punch after actual-start rounding.
    pub actual_start_time: Option<NaiveDateTime>,
    /// The recorded end time.
    pub end_time: Option<NaiveDateTime>,
    /// The actual end punch after actual-end rounding.
    pub actual_end_time: Option<NaiveDateTime>,
    /// Minutes of lateness.
    pub late_minutes: i64,
    /// Minutes of leaving early.
    pub leave_early_minutes: i64,
    /// Total rest minutes.
    pub rest_minutes: i64,
    /// Minutes worked excluding rest.
    pub work_minutes: i64,
    /// Contractual working minutes.
    pub prescribed_work_minutes: i64,
    /// Minutes worked beyond the contractual minutes.
    pub overtime_minutes: i64,
    /// Overtime minutes within the legal daily limit.
    pub overtime_within_legal_minutes: i64,
    /// Overtime minutes beyond the legal daily limit.
    pub overtime_beyond_legal_minutes: i64,
}

impl AttendanceRecord {
    /// Returns this record's natural key.
    pub fn key(&self) -> AttendanceKey {
        AttendanceKey {
            employee_id: self.employee_id.clone(),
            work_date: self.work_date,
            times_work: self.times_work,
        }
    }

    /// Returns the resolved start/end bounds.
    pub fn bounds(&self) -> AttendanceBounds {
        AttendanceBounds {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// A rest occurrence for one attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestIntervalRecord {
    /// The employee identifier.
    pub employee_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// The work occurrence counter.
    pub times_work: u32,
    /// The rest slot number.
    pub rest_slot: u32,
    /// Start of the rest, unset when no rest was taken.
    pub rest_start: Option<NaiveDateTime>,
    /// End of the rest, unset when no rest was taken.
    pub rest_end: Option<NaiveDateTime>,
    /// Rounded rest minutes.
    pub rest_minutes: i64,
}

impl RestIntervalRecord {
    /// Creates an empty rest record for a slot of an attendance record.
    pub fn empty(key: &AttendanceKey, rest_slot: u32) -> Self {
        Self {
            employee_id: key.employee_id.clone(),
            work_date: key.work_date,
            times_work: key.times_work,
            rest_slot,
            rest_start: None,
            rest_end: None,
            rest_minutes: 0,
        }
    }

    /// Returns this record's natural key.
    pub fn key(&self) -> RestKey {
        RestKey {
            attendance: AttendanceKey {
                employee_id: self.employee_id.clone(),
                work_date: self.work_date,
                times_work: self.times_work,
            },
            rest_slot: self.rest_slot,
        }
    }
}
