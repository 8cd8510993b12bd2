//! Request status filtering for leave consumption.
//!
//! Decides whether a leave request counts as consumed from its workflow state.

use crate::models::WorkflowState;

/// Returns true if a request in the given workflow state counts as consumed.
///
/// With `only_approved`, only completed workflows count. Otherwise every
/// state except draft and withdrawn counts (pending, in approval, returned
/// and completed requests are all consumed).
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::is_consumed;
/// use attendance_engine::models::{WorkflowState, WorkflowStatus};
///
/// let pending = WorkflowState { workflow_id: 1, status: WorkflowStatus::Pending, stage: 1 };
/// assert!(!is_consumed(&pending, true));
/// assert!(is_consumed(&pending, false));
/// ```
pub fn is_consumed(workflow: &WorkflowState, only_approved: bool) -> bool {
    if only_approved {
        workflow.is_completed()
    } else {
        !(workflow.is_draft() || workflow.is_withdrawn())
    }
}

/// Like [`is_consumed`], treating a missing workflow state as not consumed.
pub fn is_consumed_opt(workflow: Option<&WorkflowState>, only_approved: bool) -> bool {
    workflow.is_some_and(|state| is_consumed(state, only_approved))
}
