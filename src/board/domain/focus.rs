//! Single-task focus for the detail view.

use super::{Task, TaskId, drag::find_task};
use tracing::debug;

/// Which task, if any, is open in the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FocusState {
    /// No task is focused.
    #[default]
    None,
    /// The identified task is focused.
    Focused(TaskId),
}

impl FocusState {
    /// Returns the focused task identifier, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<&TaskId> {
        match self {
            Self::None => None,
            Self::Focused(task_id) => Some(task_id),
        }
    }

    /// Focuses `task_id`, replacing any previous focus.
    ///
    /// Unknown tasks leave the focus unchanged.
    pub fn select(&mut self, tasks: &[Task], task_id: &TaskId) {
        if find_task(tasks, task_id).is_none() {
            debug!(task_id = %task_id, "ignoring focus on unknown task");
            return;
        }
        *self = Self::Focused(task_id.clone());
    }

    /// Clears the focus. Closing when nothing is focused is a no-op.
    pub fn close(&mut self) {
        *self = Self::None;
    }

    /// Clears the focus when the focused task is no longer listed.
    pub fn reconcile(&mut self, tasks: &[Task]) {
        if let Self::Focused(task_id) = self
            && find_task(tasks, task_id).is_none()
        {
            debug!(task_id = %task_id, "focused task removed from board");
            *self = Self::None;
        }
    }

    /// Resolves the focused task against `tasks`.
    #[must_use]
    pub fn resolve<'a>(&self, tasks: &'a [Task]) -> Option<&'a Task> {
        self.focused().and_then(|task_id| find_task(tasks, task_id))
    }
}
