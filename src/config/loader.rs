//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! settings from YAML files, and the [`SettingsProvider`] trait through
//! which the service reads them.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::history::InMemoryHistoryStore;
use crate::models::{ApplicationSettings, ScheduledPattern};

use super::types::{ApplicationConfig, EmployeeAssignment, EmployeesConfig, WorkTypesConfig};

const LEAVE_HISTORY_FILE: &str = "leave_history.yaml";

/// Source of application settings and scheduled patterns.
pub trait SettingsProvider: Send + Sync {
    /// The effective settings for an employee on a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SettingsNotFound`] if none are configured.
    fn application_settings(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<ApplicationSettings>;

    /// The scheduled work pattern for an employee on a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SettingsNotFound`] if none is configured.
    fn scheduled_pattern(&self, employee_id: &str, date: NaiveDate)
    -> EngineResult<ScheduledPattern>;
}

/// Loads and parses a YAML file.
///
/// A missing or unreadable file is [`EngineError::ConfigNotFound`]; invalid
/// content is [`EngineError::ConfigParseError`].
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── application.yaml    # Named settings profiles (rounding rules)
/// ├── work_types.yaml     # Work types with HH:MM schedules and items
/// ├── employees.yaml      # Employee -> settings profile + work type
/// └── leave_history.yaml  # Optional seed for the leave history store
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::{ConfigLoader, SettingsProvider};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let pattern = loader.scheduled_pattern("emp_001", date)?;
/// println!("Scheduled start: {}", pattern.scheduled_start);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    application: ApplicationConfig,
    work_types: WorkTypesConfig,
    employees: EmployeesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - An employee refers to an unknown settings profile or work type
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let application = load_yaml::<ApplicationConfig>(&path.join("application.yaml"))?;
        let work_types = load_yaml::<WorkTypesConfig>(&path.join("work_types.yaml"))?;
        let employees_path = path.join("employees.yaml");
        let employees = load_yaml::<EmployeesConfig>(&employees_path)?;

        for (employee_id, assignment) in &employees.employees {
            if !application.profiles.contains_key(&assignment.settings_profile) {
                return Err(EngineError::ConfigParseError {
                    path: employees_path.display().to_string(),
                    message: format!(
                        "employee '{}' refers to unknown settings profile '{}'",
                        employee_id, assignment.settings_profile
                    ),
                });
            }
            if !work_types.work_types.contains_key(&assignment.work_type) {
                return Err(EngineError::ConfigParseError {
                    path: employees_path.display().to_string(),
                    message: format!(
                        "employee '{}' refers to unknown work type '{}'",
                        employee_id, assignment.work_type
                    ),
                });
            }
        }

        Ok(Self {
            root: path.to_path_buf(),
            application,
            work_types,
            employees,
        })
    }

    /// Loads the optional leave history seed next to the configuration.
    ///
    /// Returns an empty store when the directory has no history file.
    pub fn leave_history(&self) -> EngineResult<InMemoryHistoryStore> {
        let path = self.root.join(LEAVE_HISTORY_FILE);
        if !path.exists() {
            return Ok(InMemoryHistoryStore::new());
        }
        InMemoryHistoryStore::load(path)
    }

    /// Returns the assignment of an employee.
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeAssignment> {
        self.employees.employees.get(employee_id)
    }

    fn assignment(&self, employee_id: &str, date: NaiveDate) -> EngineResult<&EmployeeAssignment> {
        self.employee(employee_id)
            .ok_or_else(|| EngineError::SettingsNotFound {
                employee_id: employee_id.to_string(),
                date,
            })
    }
}

impl SettingsProvider for ConfigLoader {
    fn application_settings(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<ApplicationSettings> {
        let assignment = self.assignment(employee_id, date)?;
        self.application
            .profiles
            .get(&assignment.settings_profile)
            .cloned()
            .ok_or_else(|| EngineError::SettingsNotFound {
                employee_id: employee_id.to_string(),
                date,
            })
    }

    fn scheduled_pattern(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<ScheduledPattern> {
        let assignment = self.assignment(employee_id, date)?;
        let work_type = self
            .work_types
            .work_types
            .get(&assignment.work_type)
            .ok_or_else(|| EngineError::SettingsNotFound {
                employee_id: employee_id.to_string(),
                date,
            })?;

        let scheduled_start = date.and_time(work_type.start);
        let end_date = if work_type.end <= work_type.start {
            date.checked_add_days(Days::new(1)).ok_or_else(|| {
                EngineError::date_conversion(format!("no day after {}", date))
            })?
        } else {
            date
        };

        Ok(ScheduledPattern {
            work_type_code: assignment.work_type.clone(),
            scheduled_start,
            scheduled_end: end_date.and_time(work_type.end),
            direct_start: work_type.direct_start,
            direct_end: work_type.direct_end,
            prescribed_work_minutes: work_type.prescribed_work_minutes,
            items: work_type.items.clone(),
        })
    }
}
