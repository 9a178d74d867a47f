//! In-memory adapters for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{
    domain::Suggestion,
    ports::{
        BoardSnapshot, DispatchError, DispatchResult, NextActionDispatcher, TaskSource,
        TaskSourceError, TaskSourceResult,
    },
};

/// Task source serving a replaceable snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    snapshot: Arc<RwLock<BoardSnapshot>>,
}

impl InMemoryTaskSource {
    /// Creates a source serving `snapshot`.
    #[must_use]
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Replaces the snapshot served by subsequent loads.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Unavailable`] when the lock is poisoned.
    pub fn replace(&self, snapshot: BoardSnapshot) -> TaskSourceResult<()> {
        let mut guard = self.snapshot.write().map_err(|err| {
            TaskSourceError::Unavailable(Arc::new(std::io::Error::other(err.to_string())))
        })?;
        *guard = snapshot;
        Ok(())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn load(&self) -> TaskSourceResult<BoardSnapshot> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|err| {
                TaskSourceError::Unavailable(Arc::new(std::io::Error::other(err.to_string())))
            })?
            .clone();
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Dispatcher that records performed suggestions instead of acting on them.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    performed: Arc<RwLock<Vec<Suggestion>>>,
}

impl RecordingDispatcher {
    /// Creates a dispatcher with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the suggestions performed so far, oldest first.
    ///
    /// Entries recorded before a poisoning panic are still returned.
    #[must_use]
    pub fn performed(&self) -> Vec<Suggestion> {
        self.performed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NextActionDispatcher for RecordingDispatcher {
    async fn perform(&self, suggestion: &Suggestion) -> DispatchResult<()> {
        self.performed
            .write()
            .map_err(|err| DispatchError::Failed {
                task_id: suggestion.task().id().clone(),
                reason: err.to_string(),
            })?
            .push(suggestion.clone());
        Ok(())
    }
}
