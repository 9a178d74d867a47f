//! Drag-and-drop tracking and the suggestion slot it drives.

use super::{
    BoardDomainError, BoardEffect, Suggestion, SuggestionId, Task, TaskId, TaskStatus, ViewMode,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Whether a task is currently being dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged; holds the task as it was when the drag
    /// started.
    Dragging(Box<Task>),
}

impl DragState {
    /// Returns the dragged task identifier, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(task) => Some(task.id()),
        }
    }
}

/// State machine coupling the drag axis with the suggestion slot.
///
/// The slot holds at most one suggestion. Every activation yields an
/// [`BoardEffect::ArmAutoDismiss`] and every clear a preceding
/// [`BoardEffect::CancelAutoDismiss`], so the scheduler never holds two
/// timers for the slot. Invalid or out-of-sequence inputs are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSuggestionMachine {
    drag: DragState,
    suggestion: Option<Suggestion>,
    auto_dismiss: Duration,
}

impl DragSuggestionMachine {
    /// Creates an idle machine whose suggestions auto-dismiss after `auto_dismiss`.
    #[must_use]
    pub const fn new(auto_dismiss: Duration) -> Self {
        Self {
            drag: DragState::Idle,
            suggestion: None,
            auto_dismiss,
        }
    }

    /// Returns the drag axis.
    #[must_use]
    pub const fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Returns the active suggestion, if any.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    /// Starts dragging `task_id`. Unknown tasks are ignored.
    pub fn drag_start(&mut self, tasks: &[Task], task_id: &TaskId) {
        let Some(task) = find_task(tasks, task_id) else {
            debug!(task_id = %task_id, "ignoring drag start for unknown task");
            return;
        };
        debug!(task_id = %task_id, status = %task.status(), "drag started");
        self.drag = DragState::Dragging(Box::new(task.clone()));
    }

    /// Completes the current drag and proposes a follow-up action.
    ///
    /// Any active suggestion is cleared first. The proposal follows the
    /// status the task had when the drag started: in My View a `todo` task
    /// yields a branch suggestion and an `in-progress` task a pull request
    /// suggestion; everything else yields none. The task must still be
    /// listed in `tasks`.
    pub fn drag_end(&mut self, tasks: &[Task], view_mode: ViewMode) -> Vec<BoardEffect> {
        let DragState::Dragging(dragged) = std::mem::take(&mut self.drag) else {
            debug!("ignoring drag end without an active drag");
            return Vec::new();
        };

        let mut effects = Vec::new();
        self.clear_into(&mut effects);

        let Some(task) = find_task(tasks, dragged.id()) else {
            debug!(task_id = %dragged.id(), "dragged task left the board before drop");
            return effects;
        };

        let proposal = match (view_mode, dragged.status()) {
            (ViewMode::MyView, TaskStatus::Todo) => Some(Suggestion::branch(task)),
            (ViewMode::MyView, TaskStatus::InProgress) => Some(Suggestion::pull_request(task)),
            _ => None,
        };
        if let Some(result) = proposal {
            self.activate_result(result, &mut effects);
        }
        effects
    }

    /// Accepts the active suggestion.
    pub fn accept(&mut self) -> Vec<BoardEffect> {
        let mut effects = Vec::new();
        if let Some(suggestion) = self.clear_into(&mut effects) {
            info!(
                suggestion_id = %suggestion.id(),
                kind = %suggestion.kind(),
                "suggestion accepted"
            );
            effects.push(BoardEffect::PerformSuggestion(suggestion));
        } else {
            debug!("ignoring suggestion action without an active suggestion");
        }
        effects
    }

    /// Dismisses the active suggestion.
    pub fn dismiss(&mut self) -> Vec<BoardEffect> {
        let mut effects = Vec::new();
        if let Some(suggestion) = self.clear_into(&mut effects) {
            debug!(suggestion_id = %suggestion.id(), "suggestion dismissed");
            effects.push(BoardEffect::SuggestionDismissed(suggestion));
        } else {
            debug!("ignoring suggestion cancel without an active suggestion");
        }
        effects
    }

    /// Dismisses the active suggestion if it is the one `expired` refers to.
    pub fn expire(&mut self, expired: SuggestionId) -> Vec<BoardEffect> {
        let Some(suggestion) = self.suggestion.take_if(|active| active.id() == expired) else {
            debug!(suggestion_id = %expired, "ignoring stale auto-dismiss");
            return Vec::new();
        };
        debug!(suggestion_id = %expired, "suggestion auto-dismissed");
        vec![BoardEffect::SuggestionDismissed(suggestion)]
    }

    /// Proposes assigning an unowned task to `assignee`.
    ///
    /// Unknown and already-assigned tasks are ignored.
    pub fn request_assignee_match(
        &mut self,
        tasks: &[Task],
        task_id: &TaskId,
        assignee: &str,
    ) -> Vec<BoardEffect> {
        let Some(task) = find_task(tasks, task_id).filter(|task| task.assignee().is_none()) else {
            debug!(task_id = %task_id, "ignoring assignee match for unknown or assigned task");
            return Vec::new();
        };
        let mut effects = Vec::new();
        self.clear_into(&mut effects);
        self.activate_result(Suggestion::assign(task, assignee), &mut effects);
        effects
    }

    /// Drops the drag target and suggestion when their task is no longer listed.
    pub fn reconcile(&mut self, tasks: &[Task]) -> Vec<BoardEffect> {
        if let DragState::Dragging(dragged) = &self.drag
            && find_task(tasks, dragged.id()).is_none()
        {
            debug!(task_id = %dragged.id(), "dragged task removed from board");
            self.drag = DragState::Idle;
        }

        let mut effects = Vec::new();
        let orphaned = self
            .suggestion
            .as_ref()
            .is_some_and(|suggestion| find_task(tasks, suggestion.task().id()).is_none());
        if orphaned && let Some(suggestion) = self.clear_into(&mut effects) {
            debug!(suggestion_id = %suggestion.id(), "suggestion task removed from board");
            effects.push(BoardEffect::SuggestionDismissed(suggestion));
        }
        effects
    }

    fn clear_into(&mut self, effects: &mut Vec<BoardEffect>) -> Option<Suggestion> {
        let previous = self.suggestion.take()?;
        effects.push(BoardEffect::CancelAutoDismiss);
        Some(previous)
    }

    fn activate_result(
        &mut self,
        result: Result<Suggestion, BoardDomainError>,
        effects: &mut Vec<BoardEffect>,
    ) {
        match result {
            Ok(suggestion) => {
                info!(
                    suggestion_id = %suggestion.id(),
                    kind = %suggestion.kind(),
                    task_id = %suggestion.task().id(),
                    "suggestion activated"
                );
                effects.push(BoardEffect::ArmAutoDismiss {
                    suggestion: suggestion.id(),
                    delay: self.auto_dismiss,
                });
                self.suggestion = Some(suggestion);
            }
            Err(error) => warn!(%error, "suggestion prompt could not be built"),
        }
    }
}

pub(super) fn find_task<'a>(tasks: &'a [Task], task_id: &TaskId) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id() == task_id)
}
