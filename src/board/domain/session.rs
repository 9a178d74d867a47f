//! Composed per-session board state.

use super::{
    BoardConfig, DragSuggestionMachine, FocusState, Suggestion, SuggestionId, Task, TaskId,
    UserId, ViewMode,
};
use std::time::Duration;
use tracing::debug;

/// Discrete input emitted by the renderer or the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Switch the view mode.
    SelectView(ViewMode),
    /// A card started being dragged.
    DragStart(TaskId),
    /// The current drag was dropped.
    DragEnd,
    /// Open a task in the detail view.
    SelectTask(TaskId),
    /// Close the detail view.
    CloseFocus,
    /// Accept the active suggestion.
    SuggestionAction,
    /// Dismiss the active suggestion.
    SuggestionCancel,
    /// The auto-dismiss timer for a suggestion fired.
    SuggestionTimedOut(SuggestionId),
    /// Ask for an assignee proposal for an unowned task.
    RequestAssigneeMatch(TaskId),
}

/// Instruction for the application layer produced by a state change.
///
/// Effects are emitted in the order they must be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEffect {
    /// Schedule an auto-dismiss for the newly active suggestion, replacing
    /// any pending one.
    ArmAutoDismiss {
        /// Suggestion the timer belongs to.
        suggestion: SuggestionId,
        /// Delay before the timeout fires.
        delay: Duration,
    },
    /// Cancel the pending auto-dismiss.
    CancelAutoDismiss,
    /// Carry out the accepted suggestion.
    PerformSuggestion(Suggestion),
    /// The suggestion was closed without action.
    SuggestionDismissed(Suggestion),
}

/// All mutable state of one board session.
///
/// The session is changed only through [`BoardSession::apply`] and
/// [`BoardSession::reconcile`]; the task list is passed in on every call and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSession {
    config: BoardConfig,
    view_mode: ViewMode,
    machine: DragSuggestionMachine,
    focus: FocusState,
}

impl BoardSession {
    /// Creates a Team Space session with nothing dragged, suggested or focused.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let machine = DragSuggestionMachine::new(config.auto_dismiss_delay());
        Self {
            config,
            view_mode: ViewMode::default(),
            machine,
            focus: FocusState::default(),
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns the drag and suggestion state.
    #[must_use]
    pub const fn machine(&self) -> &DragSuggestionMachine {
        &self.machine
    }

    /// Returns the focus state.
    #[must_use]
    pub const fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Changes whose perspective My View is computed from.
    pub fn set_current_user(&mut self, user: UserId) {
        debug!(user = %user, "current user changed");
        self.config.current_user = user;
    }

    /// Applies `event` against the current task list.
    pub fn apply(&mut self, tasks: &[Task], event: BoardEvent) -> Vec<BoardEffect> {
        match event {
            BoardEvent::SelectView(view_mode) => {
                debug!(view_mode = %view_mode, "view selected");
                self.view_mode = view_mode;
                Vec::new()
            }
            BoardEvent::DragStart(task_id) => {
                self.machine.drag_start(tasks, &task_id);
                Vec::new()
            }
            BoardEvent::DragEnd => self.machine.drag_end(tasks, self.view_mode),
            BoardEvent::SelectTask(task_id) => {
                self.focus.select(tasks, &task_id);
                Vec::new()
            }
            BoardEvent::CloseFocus => {
                self.focus.close();
                Vec::new()
            }
            BoardEvent::SuggestionAction => self.machine.accept(),
            BoardEvent::SuggestionCancel => self.machine.dismiss(),
            BoardEvent::SuggestionTimedOut(suggestion_id) => self.machine.expire(suggestion_id),
            BoardEvent::RequestAssigneeMatch(task_id) => self.machine.request_assignee_match(
                tasks,
                &task_id,
                &self.config.assignee_match_name,
            ),
        }
    }

    /// Drops references to tasks missing from a replaced task list.
    pub fn reconcile(&mut self, tasks: &[Task]) -> Vec<BoardEffect> {
        self.focus.reconcile(tasks);
        self.machine.reconcile(tasks)
    }
}
