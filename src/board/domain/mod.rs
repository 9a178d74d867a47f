//! Domain model for board visibility and interaction state.
//!
//! Everything here is synchronous and free of I/O. The task list is an
//! immutable input; session state changes only through board events and
//! reports follow-up work as [`BoardEffect`] values.

mod column;
mod config;
mod drag;
mod error;
mod focus;
mod ids;
mod label;
mod render;
mod session;
mod style;
mod suggestion;
mod task;
mod view;

pub use column::{Column, ColumnEntry, build_columns};
pub use config::{
    BoardConfig, DEFAULT_AUTO_DISMISS_MS, DEFAULT_BOTTLENECK_THRESHOLD, DEFAULT_CURRENT_USER,
};
pub use drag::{DragState, DragSuggestionMachine};
pub use error::{
    BoardDomainError, ParsePullRequestStatusError, ParseTaskPriorityError, ParseTaskStatusError,
    ParseViewModeError,
};
pub use focus::FocusState;
pub use ids::{SuggestionId, TaskId, UserId};
pub use label::{ContextualLabel, contextual_label, hour_of};
pub use render::{
    AssigneeHint, CardDetails, ColumnView, CommitSummary, DevelopmentStatus, PullRequestBadge,
    RenderModel, RenderRequest, SuggestionView, TaskCard, TaskDetail,
};
pub use session::{BoardEffect, BoardEvent, BoardSession};
pub use style::{PriorityStyle, PullRequestStyle};
pub use suggestion::{Suggestion, SuggestionKind, SuggestionPrompt, title_slug};
pub use task::{
    Assignee, Commit, PullRequestInfo, PullRequestStatus, Task, TaskPriority, TaskStatus,
};
pub use view::{ViewMode, is_relevant, visible_tasks};
