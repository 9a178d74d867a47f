//! Dispatcher port carrying out accepted suggestions.

use crate::board::domain::{Suggestion, TaskId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Collaborator that performs the work an accepted suggestion proposes,
/// such as creating a branch or opening a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NextActionDispatcher: Send + Sync {
    /// Performs `suggestion`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the collaborator rejects the action.
    async fn perform(&self, suggestion: &Suggestion) -> DispatchResult<()>;
}

/// Errors returned by dispatcher implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The collaborator failed while performing the action.
    #[error("action for task {task_id} failed: {reason}")]
    Failed {
        /// Task the action was for.
        task_id: TaskId,
        /// Failure description.
        reason: String,
    },
}
