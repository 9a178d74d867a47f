//! View modes and the visibility filter.

use super::{ParseViewModeError, Task, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Perspective the board is rendered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Every task on the board.
    #[default]
    TeamSpace,
    /// Tasks relevant to the current user.
    MyView,
}

impl ViewMode {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamSpace => "team-space",
            Self::MyView => "my-view",
        }
    }

    /// Returns the caption shown under the project title.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::TeamSpace => "Complete project overview",
            Self::MyView => "Your personal workspace",
        }
    }
}

impl TryFrom<&str> for ViewMode {
    type Error = ParseViewModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "team-space" => Ok(Self::TeamSpace),
            "my-view" => Ok(Self::MyView),
            _ => Err(ParseViewModeError(value.to_owned())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether `task` matters to `current_user` under `view_mode`.
///
/// Every task is relevant in Team Space. In My View a task is relevant when
/// it is assigned to the user, requests their review, or mentions them.
#[must_use]
pub fn is_relevant(task: &Task, view_mode: ViewMode, current_user: &UserId) -> bool {
    match view_mode {
        ViewMode::TeamSpace => true,
        ViewMode::MyView => {
            task.is_assigned_to(current_user) || task.review_requested() || task.mentions()
        }
    }
}

/// Returns the tasks visible under `view_mode`, preserving input order.
#[must_use]
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    view_mode: ViewMode,
    current_user: &UserId,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_relevant(task, view_mode, current_user))
        .collect()
}
