//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::history::AttendanceLedger;
use crate::service::AttendanceService;

/// Shared application state.
///
/// Holds the attendance service and the ledger it writes to. Writes take
/// the ledger's write lock, so registrations are serialized.
#[derive(Clone)]
pub struct AppState {
    service: Arc<AttendanceService>,
    ledger: Arc<RwLock<AttendanceLedger>>,
}

impl AppState {
    /// Creates a new application state with an empty ledger.
    pub fn new(service: AttendanceService) -> Self {
        Self {
            service: Arc::new(service),
            ledger: Arc::new(RwLock::new(AttendanceLedger::new())),
        }
    }

    /// Builds the state from a configuration directory.
    ///
    /// The configuration loader provides settings and the optional leave
    /// history seed.
    pub fn from_config(config: ConfigLoader) -> EngineResult<Self> {
        let history = config.leave_history()?;
        Ok(Self::new(AttendanceService::new(
            Arc::new(config),
            Arc::new(history),
        )))
    }

    /// Returns the attendance service.
    pub fn service(&self) -> &AttendanceService {
        &self.service
    }

    /// Returns the shared ledger.
    pub fn ledger(&self) -> &RwLock<AttendanceLedger> {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_config_loads_history() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::from_config(config).unwrap();
        let outcome = state
            .service()
            .carryover(
                "emp_001",
                chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                true,
            )
            .unwrap();
        assert_eq!(outcome.days, "8.0");
    }
}
