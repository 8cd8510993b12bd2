//! Workflow state attached to approvable requests.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an approvable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Saved but not submitted.
    Draft,
    /// Submitted, awaiting the first approver.
    Pending,
    /// Approved by some but not all approval stages.
    InApproval,
    /// Sent back to the applicant.
    Returned,
    /// Withdrawn by the applicant.
    Withdrawn,
    /// Fully approved.
    Completed,
}

/// The latest state of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Workflow identifier.
    pub workflow_id: u64,
    /// Current status.
    pub status: WorkflowStatus,
    /// Current approval stage.
    #[serde(default)]
    pub stage: u32,
}

impl WorkflowState {
    /// Returns true if the workflow is fully approved.
    pub fn is_completed(&self) -> bool {
        self.status == WorkflowStatus::Completed
    }

    /// Returns true if the workflow is still a draft.
    pub fn is_draft(&self) -> bool {
        self.status == WorkflowStatus::Draft
    }

    /// Returns true if the workflow was withdrawn.
    pub fn is_withdrawn(&self) -> bool {
        self.status == WorkflowStatus::Withdrawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(status: WorkflowStatus) -> WorkflowState {
        WorkflowState {
            workflow_id: 1,
            status,
            stage: 0,
        }
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let completed = state(WorkflowStatus::Completed);
        assert!(completed.is_completed());
        assert!(!completed.is_draft());
        assert!(!completed.is_withdrawn());

        assert!(state(WorkflowStatus::Draft).is_draft());
        assert!(state(WorkflowStatus::Withdrawn).is_withdrawn());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&WorkflowStatus::InApproval).unwrap();
        assert_eq!(json, "\"in_approval\"");
    }
}
