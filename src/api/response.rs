//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::history::RecordId;
use crate::models::{AttendanceRecord, RestIntervalRecord};
use crate::service::{CarryoverOutcome, RegistrationOutcome};

/// Response body for `POST /attendance/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Correlation id of the request.
    pub correlation_id: Uuid,
    /// The registration outcome.
    #[serde(flatten)]
    pub outcome: RegistrationOutcome,
}

/// Response body for `GET /attendance/:employee_id/:work_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// The current attendance record.
    pub record: AttendanceRecord,
    /// The current rest records, by slot.
    pub rests: Vec<RestIntervalRecord>,
    /// Number of stored versions of the record.
    pub versions: usize,
}

/// Response body for `DELETE /attendance/:employee_id/:work_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionResponse {
    /// Correlation id of the request.
    pub correlation_id: Uuid,
    /// The version id of the retired attendance record.
    pub retired_record_id: RecordId,
}

/// Response body for `POST /leave/carryover`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarryoverResponse {
    /// Correlation id of the request.
    pub correlation_id: Uuid,
    /// The carryover outcome.
    #[serde(flatten)]
    pub outcome: CarryoverOutcome,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::SettingsNotFound { employee_id, date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SETTINGS_NOT_FOUND",
                    format!("Settings not found for employee '{}'", employee_id),
                    format!("No settings profile or work type applies on {}", date),
                ),
            },
            EngineError::DateConversion { message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "DATE_CONVERSION_ERROR",
                    "Date conversion failed",
                    message,
                ),
            },
            EngineError::HistoryAccess {
                source_name,
                message,
            } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "HISTORY_ACCESS_ERROR",
                    format!("History source '{}' could not be read", source_name),
                    message,
                ),
            },
            EngineError::RecordNotFound { key } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", format!("Record not found: {}", key)),
            },
        }
    }
}
