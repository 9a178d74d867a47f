//! Error types for board domain parsing and validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A task identifier was empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// A user identifier was empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// A suggestion prompt template failed to render.
    #[error("failed to render {kind} suggestion prompt: {reason}")]
    PromptRender {
        /// Suggestion kind whose template failed.
        kind: &'static str,
        /// Renderer failure description.
        reason: String,
    },
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a pull request status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pull request status: {0}")]
pub struct ParsePullRequestStatusError(pub String);

/// Error returned while parsing a board view mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown view mode: {0}")]
pub struct ParseViewModeError(pub String);
