//! Read access to leave and workflow history.
//!
//! The [`HistoryStore`] trait is the boundary between the carryover
//! calculator and whatever persists grants, transactions, requests and
//! workflow states. [`InMemoryHistoryStore`] is the bundled implementation.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::load_yaml;
use crate::error::EngineResult;
use crate::models::{LeaveGrantEntry, LeaveRequest, LeaveTransaction, LeaveWindow, WorkflowState};

/// Source of leave and workflow history for one employee.
///
/// Implementations return [`crate::error::EngineError::HistoryAccess`] when
/// the underlying data cannot be read. Absence of data is an empty list or
/// `None`, never an error.
pub trait HistoryStore: Send + Sync {
    /// Automatic grants acquired inside the window.
    fn grants_in_window(
        &self,
        employee_id: &str,
        window: &LeaveWindow,
    ) -> EngineResult<Vec<LeaveGrantEntry>>;

    /// All manual transactions for the employee.
    fn transactions(&self, employee_id: &str) -> EngineResult<Vec<LeaveTransaction>>;

    /// Leave requests acquired inside the window.
    fn requests_in_window(
        &self,
        employee_id: &str,
        window: &LeaveWindow,
    ) -> EngineResult<Vec<LeaveRequest>>;

    /// The latest state of a workflow.
    fn latest_workflow(&self, workflow_id: u64) -> EngineResult<Option<WorkflowState>>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LeaveHistoryFile {
    grants: Vec<LeaveGrantEntry>,
    transactions: Vec<LeaveTransaction>,
    requests: Vec<LeaveRequest>,
    workflows: Vec<WorkflowState>,
}

/// A history store held entirely in memory.
///
/// # Example
///
/// ```
/// use attendance_engine::history::{HistoryStore, InMemoryHistoryStore};
/// use attendance_engine::models::{WorkflowState, WorkflowStatus};
///
/// let mut store = InMemoryHistoryStore::new();
/// store.add_workflow(WorkflowState { workflow_id: 7, status: WorkflowStatus::Completed, stage: 2 });
/// assert!(store.latest_workflow(7).unwrap().unwrap().is_completed());
/// assert!(store.latest_workflow(8).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    grants: Vec<LeaveGrantEntry>,
    transactions: Vec<LeaveTransaction>,
    requests: Vec<LeaveRequest>,
    workflows: HashMap<u64, WorkflowState>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a YAML file with `grants`, `transactions`,
    /// `requests` and `workflows` lists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file is missing and
    /// `ConfigParseError` if it is not valid.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file: LeaveHistoryFile = load_yaml(path.as_ref())?;
        let mut store = Self::new();
        store.grants = file.grants;
        store.transactions = file.transactions;
        store.requests = file.requests;
        for workflow in file.workflows {
            store.add_workflow(workflow);
        }
        Ok(store)
    }

    /// Adds an automatic grant.
    pub fn add_grant(&mut self, grant: LeaveGrantEntry) {
        self.grants.push(grant);
    }

    /// Adds a manual transaction.
    pub fn add_transaction(&mut self, transaction: LeaveTransaction) {
        self.transactions.push(transaction);
    }

    /// Adds a leave request.
    pub fn add_request(&mut self, request: LeaveRequest) {
        self.requests.push(request);
    }

    /// Records the latest state of a workflow, replacing any earlier state.
    pub fn add_workflow(&mut self, workflow: WorkflowState) {
        self.workflows.insert(workflow.workflow_id, workflow);
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn grants_in_window(
        &self,
        employee_id: &str,
        window: &LeaveWindow,
    ) -> EngineResult<Vec<LeaveGrantEntry>> {
        Ok(self
            .grants
            .iter()
            .filter(|g| g.employee_id == employee_id && window.contains(g.acquisition_date))
            .cloned()
            .collect())
    }

    fn transactions(&self, employee_id: &str) -> EngineResult<Vec<LeaveTransaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn requests_in_window(
        &self,
        employee_id: &str,
        window: &LeaveWindow,
    ) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .requests
            .iter()
            .filter(|r| r.employee_id == employee_id && window.contains(r.acquisition_date))
            .cloned()
            .collect())
    }

    fn latest_workflow(&self, workflow_id: u64) -> EngineResult<Option<WorkflowState>> {
        Ok(self.workflows.get(&workflow_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn grant(employee_id: &str, date: &str) -> LeaveGrantEntry {
        LeaveGrantEntry {
            employee_id: employee_id.to_string(),
            acquisition_date: make_date(date),
            hold_days: Decimal::from(10),
            hold_hours: 0,
            limit_date: make_date("2027-03-31"),
        }
    }

    #[test]
    fn test_grants_filtered_by_employee_and_window() {
        let mut store = InMemoryHistoryStore::new();
        store.add_grant(grant("emp_001", "2024-10-01"));
        store.add_grant(grant("emp_001", "2023-10-01"));
        store.add_grant(grant("emp_002", "2024-10-01"));

        let window = LeaveWindow::prior_cycle(make_date("2025-04-01")).unwrap();
        let grants = store.grants_in_window("emp_001", &window).unwrap();

        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].acquisition_date, make_date("2024-10-01"));
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = InMemoryHistoryStore::load("/nonexistent/leave_history.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
