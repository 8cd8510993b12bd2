//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AttendanceKey;

use super::request::{CarryoverRequest, RegisterAttendanceRequest};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceResponse, CarryoverResponse, DeletionResponse,
    RegistrationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/register", post(register_attendance_handler))
        .route(
            "/attendance/:employee_id/:work_date",
            get(get_attendance_handler).delete(delete_attendance_handler),
        )
        .route("/leave/carryover", post(carryover_handler))
        .with_state(state)
}

/// Query parameters for `GET` and `DELETE /attendance/:employee_id/:work_date`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// The work occurrence counter (defaults to 1).
    pub times_work: Option<u32>,
}

/// Handler for POST /attendance/register.
///
/// Normalizes the punches and writes a new version of the attendance record.
async fn register_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterAttendanceRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let employee_id = request.employee_id.clone();
    let work_date = request.work_date;

    let result = {
        let mut ledger = state.ledger().write().await;
        state
            .service()
            .register_attendance(&mut ledger, request.into())
    };

    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                work_date = %work_date,
                record_id = outcome.record_id,
                "Attendance registration completed"
            );
            json_response(
                StatusCode::OK,
                RegistrationResponse {
                    correlation_id,
                    outcome,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err, "Attendance registration failed"),
    }
}

/// Handler for GET /attendance/:employee_id/:work_date.
///
/// Returns the current attendance record and its rests.
async fn get_attendance_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, NaiveDate)>, PathRejection>,
    Query(query): Query<AttendanceQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (employee_id, work_date) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid attendance path"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let key = AttendanceKey {
        employee_id,
        work_date,
        times_work: query.times_work.unwrap_or(1),
    };

    let ledger = state.ledger().read().await;
    match ledger.attendance(&key) {
        Some(record) => {
            info!(correlation_id = %correlation_id, key = %key, "Attendance record found");
            json_response(
                StatusCode::OK,
                AttendanceResponse {
                    record: record.clone(),
                    rests: ledger.rests(&key).into_iter().cloned().collect(),
                    versions: ledger.attendance_history(&key).len(),
                },
            )
        }
        None => engine_error_response(
            correlation_id,
            EngineError::RecordNotFound {
                key: key.to_string(),
            },
            "Attendance record not found",
        ),
    }
}

/// Handler for DELETE /attendance/:employee_id/:work_date.
///
/// Retires the current attendance record and its rests.
async fn delete_attendance_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, NaiveDate)>, PathRejection>,
    Query(query): Query<AttendanceQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance deletion");

    let (employee_id, work_date) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid attendance path"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let key = AttendanceKey {
        employee_id,
        work_date,
        times_work: query.times_work.unwrap_or(1),
    };

    let result = {
        let mut ledger = state.ledger().write().await;
        state.service().delete_attendance(&mut ledger, &key)
    };

    match result {
        Ok(retired_record_id) => json_response(
            StatusCode::OK,
            DeletionResponse {
                correlation_id,
                retired_record_id,
            },
        ),
        Err(err) => engine_error_response(correlation_id, err, "Attendance deletion failed"),
    }
}

/// Handler for POST /leave/carryover.
///
/// Returns the carried-over days and hours as display strings.
async fn carryover_handler(
    State(state): State<AppState>,
    payload: Result<Json<CarryoverRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing carryover request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().carryover(
        &request.employee_id,
        request.acquisition_date,
        request.only_approved,
    ) {
        Ok(outcome) => json_response(
            StatusCode::OK,
            CarryoverResponse {
                correlation_id,
                outcome,
            },
        ),
        Err(err) => engine_error_response(correlation_id, err, "Carryover calculation failed"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
