//! Task source port supplying board snapshots.

use crate::board::domain::{Task, TaskId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Task list and viewer identity loaded from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Viewer the snapshot was produced for, overriding the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<UserId>,
    /// Tasks in board order.
    pub tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Creates a snapshot without a viewer override.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self {
            current_user: None,
            tasks,
        }
    }

    /// Sets the viewer override.
    #[must_use]
    pub fn with_current_user(mut self, user: UserId) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Checks that every task identifier is unique.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::DuplicateTaskId`] naming the first repeated
    /// identifier.
    pub fn validate(&self) -> TaskSourceResult<()> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !seen.insert(task.id()) {
                return Err(TaskSourceError::DuplicateTaskId(task.id().clone()));
            }
        }
        Ok(())
    }
}

/// Supplier of board snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Loads the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the snapshot cannot be read, is
    /// malformed, or repeats a task identifier.
    async fn load(&self) -> TaskSourceResult<BoardSnapshot>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The underlying store could not be read.
    #[error("task source unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The snapshot could not be decoded.
    #[error("malformed board snapshot: {0}")]
    Malformed(String),

    /// Two tasks share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}
