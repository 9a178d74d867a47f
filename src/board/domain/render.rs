//! Aggregation of board state into the model consumed by the renderer.

use super::{
    Assignee, BoardConfig, BoardSession, Column, ColumnEntry, ContextualLabel,
    DragSuggestionMachine, FocusState, PriorityStyle, PullRequestInfo, PullRequestStatus,
    PullRequestStyle, Suggestion, SuggestionId, SuggestionKind, SuggestionPrompt, Task, TaskId,
    TaskPriority, TaskStatus, ViewMode, build_columns, contextual_label,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Number of commits listed in the task detail view.
const RECENT_COMMIT_LIMIT: usize = 3;

/// Inputs for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Current task snapshot.
    pub tasks: &'a [Task],
    /// Active view mode.
    pub view_mode: ViewMode,
    /// Board configuration, including the current user.
    pub config: &'a BoardConfig,
    /// Drag and suggestion state.
    pub machine: &'a DragSuggestionMachine,
    /// Focus state.
    pub focus: &'a FocusState,
    /// Local wall-clock hour, 0 to 23.
    pub hour: u32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    /// Active view mode.
    pub view_mode: ViewMode,
    /// Caption describing the view.
    pub caption: &'static str,
    /// Time-of-day badge, My View only.
    pub label: Option<ContextualLabel>,
    /// Columns in canonical order.
    pub columns: Vec<ColumnView>,
    /// The active suggestion bar.
    pub suggestion: Option<SuggestionView>,
    /// Task open in the detail view.
    pub focused_task: Option<TaskDetail>,
    /// Task currently being dragged.
    pub dragging: Option<TaskId>,
    /// Whether the board is de-emphasised behind the detail view.
    pub board_dimmed: bool,
}

/// Rendered column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    /// Status key.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Number of tasks in the column, dimmed ones included.
    pub task_count: usize,
    /// Number of tasks relevant to the viewer.
    pub relevant_count: usize,
    /// Whether the column exceeds the bottleneck threshold.
    pub has_bottleneck: bool,
    /// Cards in task-list order.
    pub tasks: Vec<TaskCard>,
}

/// Rendered task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    /// Task identifier.
    pub id: TaskId,
    /// Display key.
    pub key: String,
    /// Title.
    pub title: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Priority indicator style keys.
    pub priority_style: PriorityStyle,
    /// Assignee, if any.
    pub assignee: Option<Assignee>,
    /// Whether the viewer is the assignee.
    pub assigned_to_me: bool,
    /// Stub assignee proposal shown on unassigned cards.
    pub assignee_hint: Option<AssigneeHint>,
    /// Whether the review-requested badge is shown.
    pub review_requested: bool,
    /// Whether the card is shown at full weight and can be dragged.
    pub relevant: bool,
    /// Progressive-disclosure details, My View only.
    pub details: Option<CardDetails>,
}

/// Stub proposal for who should own an unassigned task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeHint {
    /// Proposed member.
    pub name: String,
    /// Match confidence in percent.
    pub confidence: u8,
}

/// Card details revealed in My View.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    /// Branch and pull request state, when either exists.
    pub development: Option<DevelopmentStatus>,
    /// Unread comment count.
    pub unread_comments: Option<u32>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Completion percentage of the estimate.
    pub progress_percent: Option<u32>,
}

/// Development activity linked to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentStatus {
    /// Whether a branch is linked.
    pub branch_active: bool,
    /// Pull request badge, when a pull request is linked.
    pub pull_request: Option<PullRequestBadge>,
}

/// Pull request badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PullRequestBadge {
    /// Pull request number.
    pub number: u64,
    /// Review status.
    pub status: PullRequestStatus,
    /// Human-readable status text.
    pub label: &'static str,
    /// Badge style keys.
    pub style: PullRequestStyle,
}

impl From<&PullRequestInfo> for PullRequestBadge {
    fn from(info: &PullRequestInfo) -> Self {
        Self {
            number: info.number,
            status: info.status,
            label: info.status.label(),
            style: info.status.style(),
        }
    }
}

/// Expanded single-task view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    /// Card summary with all details revealed.
    pub card: TaskCard,
    /// Description, if any.
    pub description: Option<String>,
    /// Labels.
    pub labels: Vec<String>,
    /// Epic, if any.
    pub epic: Option<String>,
    /// Linked branch name.
    pub branch: Option<String>,
    /// Linked pull request.
    pub pull_request: Option<PullRequestBadge>,
    /// Most recent commits.
    pub recent_commits: Vec<CommitSummary>,
}

/// Commit line in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSummary {
    /// Seven-character hash.
    pub short_hash: String,
    /// Commit message.
    pub message: String,
    /// Author display name.
    pub author: String,
    /// Commit time.
    pub timestamp: DateTime<Utc>,
}

/// Rendered suggestion bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionView {
    /// Activation identifier.
    pub id: SuggestionId,
    /// Proposed action.
    pub kind: SuggestionKind,
    /// Task the suggestion concerns.
    pub task_id: TaskId,
    /// Title of that task.
    pub task_title: String,
    /// Prompt copy.
    pub prompt: SuggestionPrompt,
}

impl From<&Suggestion> for SuggestionView {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            id: suggestion.id(),
            kind: suggestion.kind(),
            task_id: suggestion.task().id().clone(),
            task_title: suggestion.task().title().to_owned(),
            prompt: suggestion.prompt().clone(),
        }
    }
}

impl RenderModel {
    /// Builds the model for one frame. Inputs are only read.
    #[must_use]
    pub fn build(request: RenderRequest<'_>) -> Self {
        let cards = CardProjector {
            view_mode: request.view_mode,
            config: request.config,
        };
        let columns = build_columns(request.tasks, request.view_mode, request.config)
            .iter()
            .map(|column| cards.column(column))
            .collect();
        let focused_task = request
            .focus
            .resolve(request.tasks)
            .map(|task| cards.detail(task));
        let board_dimmed = focused_task.is_some();

        Self {
            view_mode: request.view_mode,
            caption: request.view_mode.caption(),
            label: contextual_label(request.hour, request.view_mode),
            columns,
            suggestion: request.machine.suggestion().map(SuggestionView::from),
            focused_task,
            dragging: request.machine.drag().dragged().cloned(),
            board_dimmed,
        }
    }
}

impl BoardSession {
    /// Builds the render model for `tasks` at the given clock hour.
    #[must_use]
    pub fn render(&self, tasks: &[Task], hour: u32) -> RenderModel {
        RenderModel::build(RenderRequest {
            tasks,
            view_mode: self.view_mode(),
            config: self.config(),
            machine: self.machine(),
            focus: self.focus(),
            hour,
        })
    }
}

struct CardProjector<'a> {
    view_mode: ViewMode,
    config: &'a BoardConfig,
}

impl CardProjector<'_> {
    fn column(&self, column: &Column<'_>) -> ColumnView {
        ColumnView {
            status: column.status(),
            title: column.title(),
            task_count: column.task_count(),
            relevant_count: column.relevant_count(),
            has_bottleneck: column.has_bottleneck(),
            tasks: column.entries().iter().map(|entry| self.card(entry)).collect(),
        }
    }

    fn card(&self, entry: &ColumnEntry<'_>) -> TaskCard {
        let details = matches!(self.view_mode, ViewMode::MyView).then(|| card_details(entry.task));
        self.summary(entry.task, entry.relevant, details)
    }

    fn detail(&self, task: &Task) -> TaskDetail {
        let card = self.summary(task, true, Some(card_details(task)));
        TaskDetail {
            card,
            description: task.description().map(str::to_owned),
            labels: task.labels().to_vec(),
            epic: task.epic().map(str::to_owned),
            branch: task.branch().map(str::to_owned),
            pull_request: task.pull_request().map(PullRequestBadge::from),
            recent_commits: task
                .commits()
                .iter()
                .take(RECENT_COMMIT_LIMIT)
                .map(|commit| CommitSummary {
                    short_hash: commit.short_hash(),
                    message: commit.message.clone(),
                    author: commit.author.clone(),
                    timestamp: commit.timestamp,
                })
                .collect(),
        }
    }

    fn summary(&self, task: &Task, relevant: bool, details: Option<CardDetails>) -> TaskCard {
        let assignee_hint = task.assignee().is_none().then(|| AssigneeHint {
            name: self.config.assignee_match_name.clone(),
            confidence: self.config.assignee_match_confidence,
        });
        TaskCard {
            id: task.id().clone(),
            key: task.key().to_owned(),
            title: task.title().to_owned(),
            status: task.status(),
            priority: task.priority(),
            priority_style: task.priority().style(),
            assignee: task.assignee().cloned(),
            assigned_to_me: task.is_assigned_to(&self.config.current_user),
            assignee_hint,
            review_requested: task.review_requested(),
            relevant,
            details,
        }
    }
}

fn card_details(task: &Task) -> CardDetails {
    let development = (task.branch().is_some() || task.pull_request().is_some()).then(|| {
        DevelopmentStatus {
            branch_active: task.branch().is_some(),
            pull_request: task.pull_request().map(PullRequestBadge::from),
        }
    });
    CardDetails {
        development,
        unread_comments: task.unread_comments(),
        due_date: task.due_date(),
        progress_percent: task.progress_percent(),
    }
}
