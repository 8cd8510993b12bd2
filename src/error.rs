//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while normalizing attendance
//! times and computing leave balances.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/application.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/application.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No settings or work pattern is configured for the employee.
    #[error("Settings not found for employee '{employee_id}' on {date}")]
    SettingsNotFound {
        /// The employee whose settings were requested.
        employee_id: String,
        /// The date for which settings were requested.
        date: NaiveDate,
    },

    /// Date arithmetic produced a value outside the representable calendar.
    #[error("Date conversion failed: {message}")]
    DateConversion {
        /// A description of the failed conversion.
        message: String,
    },

    /// Leave or workflow history could not be read.
    #[error("History access failed for '{source_name}': {message}")]
    HistoryAccess {
        /// The history source that failed (e.g. "grants", "workflow").
        source_name: String,
        /// A description of the access failure.
        message: String,
    },

    /// No current record exists for the given natural key.
    #[error("Record not found: {key}")]
    RecordNotFound {
        /// The natural key that was looked up.
        key: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Creates a date conversion error from any displayable message.
    pub fn date_conversion(message: impl Into<String>) -> Self {
        EngineError::DateConversion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_settings_not_found_displays_employee_and_date() {
        let error = EngineError::SettingsNotFound {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Settings not found for employee 'emp_001' on 2025-04-01"
        );
    }

    #[test]
    fn test_date_conversion_displays_message() {
        let error = EngineError::date_conversion("minute offset overflows calendar");
        assert_eq!(
            error.to_string(),
            "Date conversion failed: minute offset overflows calendar"
        );
    }

    #[test]
    fn test_history_access_displays_source_and_message() {
        let error = EngineError::HistoryAccess {
            source_name: "grants".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "History access failed for 'grants': connection reset"
        );
    }

    #[test]
    fn test_record_not_found_displays_key() {
        let error = EngineError::RecordNotFound {
            key: "emp_001/2025-04-01/1".to_string(),
        };
        assert_eq!(error.to_string(), "Record not found: emp_001/2025-04-01/1");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_date_error() -> EngineResult<()> {
            Err(EngineError::date_conversion("overflow"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_date_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
