//! Configuration loading for the Attendance Engine.
//!
//! This module loads application settings profiles, work types and
//! employee assignments from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("emp_001 works {:?}", config.employee("emp_001").map(|e| &e.work_type));
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::{ConfigLoader, SettingsProvider};
pub use types::{ApplicationConfig, EmployeeAssignment, EmployeesConfig, WorkType, WorkTypesConfig};
