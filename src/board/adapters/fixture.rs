//! JSON fixture task source.
//!
//! Reads a board snapshot such as:
//!
//! ```json
//! {
//!   "currentUser": "user-1",
//!   "tasks": [
//!     { "id": "task-1", "title": "Ship login", "status": "todo", "priority": "high" }
//!   ]
//! }
//! ```

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;
use tracing::info;

use crate::board::ports::{BoardSnapshot, TaskSource, TaskSourceError, TaskSourceResult};

/// Task source that re-reads a JSON fixture file on every load.
#[derive(Debug, Clone)]
pub struct JsonFixtureSource {
    path: Utf8PathBuf,
}

impl JsonFixtureSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TaskSource for JsonFixtureSource {
    async fn load(&self) -> TaskSourceResult<BoardSnapshot> {
        let path = self.path.clone();
        let contents = tokio::task::spawn_blocking(move || read_fixture(&path))
            .await
            .map_err(|error| TaskSourceError::Unavailable(Arc::new(error)))??;

        let snapshot = parse_snapshot(&contents)?;
        info!(
            path = %self.path,
            tasks = snapshot.tasks.len(),
            "loaded board fixture"
        );
        Ok(snapshot)
    }
}

/// Decodes and validates a snapshot from fixture text.
///
/// # Errors
///
/// Returns [`TaskSourceError::Malformed`] when the text is not a valid
/// snapshot, or [`TaskSourceError::DuplicateTaskId`] when identifiers repeat.
pub fn parse_snapshot(contents: &str) -> TaskSourceResult<BoardSnapshot> {
    let snapshot: BoardSnapshot = serde_json::from_str(contents)
        .map_err(|error| TaskSourceError::Malformed(error.to_string()))?;
    snapshot.validate()?;
    Ok(snapshot)
}

fn read_fixture(path: &Utf8Path) -> TaskSourceResult<String> {
    let file_name = path.file_name().ok_or_else(|| {
        TaskSourceError::Unavailable(Arc::new(std::io::Error::other(
            "fixture path must include a file name",
        )))
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| TaskSourceError::Unavailable(Arc::new(error)))?;
    dir.read_to_string(file_name)
        .map_err(|error| TaskSourceError::Unavailable(Arc::new(error)))
}
