//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod leave;
mod rounding;
mod settings;
mod workflow;

pub use attendance::{
    AttendanceBounds, AttendanceKey, AttendanceRecord, RestInterval, RestIntervalRecord, RestKey,
};
pub use audit::{AuditStep, AuditTrace};
pub use leave::{
    CarryoverField, LeaveGrantEntry, LeaveRange, LeaveRequest, LeaveTransaction, LeaveType,
    LeaveWindow,
};
pub use rounding::{RoundingDirection, RoundingRule};
pub use settings::{
    AUTO_BEFORE_OVERWORK_ITEM, ApplicationSettings, INACTIVATE_FLAG_OFF, RequestContext,
    ScheduledPattern, WorkTypeItem,
};
pub use workflow::{WorkflowState, WorkflowStatus};
