//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for registering attendance,
//! reading and deleting current attendance records and calculating leave
//! carryover.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{AttendanceQuery, create_router};
pub use request::{CarryoverRequest, RegisterAttendanceRequest, RestRequest};
pub use response::{
    ApiError, AttendanceResponse, CarryoverResponse, DeletionResponse, RegistrationResponse,
};
pub use state::AppState;
