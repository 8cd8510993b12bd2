//! Configuration types for attendance settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

use crate::models::{ApplicationSettings, WorkTypeItem};

/// `application.yaml`: named settings profiles.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Map of profile code to settings.
    pub profiles: HashMap<String, ApplicationSettings>,
}

/// A work type: the daily schedule an employee follows.
///
/// Times are written as `HH:MM`. An end at or before the start falls on the
/// following day.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkType {
    /// The human-readable name of the work type.
    pub name: String,
    /// Scheduled start of work.
    #[serde(deserialize_with = "deserialize_hhmm")]
    pub start: NaiveTime,
    /// Scheduled end of work.
    #[serde(deserialize_with = "deserialize_hhmm")]
    pub end: NaiveTime,
    /// No start punch is expected.
    #[serde(default)]
    pub direct_start: bool,
    /// No end punch is expected.
    #[serde(default)]
    pub direct_end: bool,
    /// Contractual working minutes.
    pub prescribed_work_minutes: i64,
    /// Additional items.
    #[serde(default)]
    pub items: Vec<WorkTypeItem>,
}

/// `work_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkTypesConfig {
    /// Map of work-type code to work type.
    pub work_types: HashMap<String, WorkType>,
}

/// An employee's assignment to a settings profile and a work type.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeAssignment {
    /// The employee's display name.
    pub name: String,
    /// The settings profile code in `application.yaml`.
    pub settings_profile: String,
    /// The work-type code in `work_types.yaml`.
    pub work_type: String,
}

/// `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Map of employee id to assignment.
    pub employees: HashMap<String, EmployeeAssignment>,
}

fn deserialize_hhmm<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&value, "%H:%M").map_err(serde::de::Error::custom)
}
