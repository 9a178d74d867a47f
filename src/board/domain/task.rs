//! Task entity and the enumerations that classify it.

use super::{
    ParsePullRequestStatusError, ParseTaskPriorityError, ParseTaskStatusError, TaskId, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task; each status owns exactly one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Captured but not yet planned.
    Backlog,
    /// Planned and ready to start.
    Todo,
    /// Being implemented.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// Canonical left-to-right column order.
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::InReview,
        Self::Done,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::InReview => "in-review",
            Self::Done => "done",
        }
    }

    /// Returns the column heading shown for this status.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "in-review" => Ok(Self::InReview),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    Medium,
    /// Should be picked up soon.
    High,
    /// Blocks other work.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of the pull request linked to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullRequestStatus {
    /// Opened as a draft.
    Draft,
    /// Open for review.
    Open,
    /// CI checks are running.
    ChecksRunning,
    /// Approved by reviewers.
    Approved,
    /// Merged into the target branch.
    Merged,
    /// Closed without merging.
    Closed,
}

impl PullRequestStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::ChecksRunning => "checks-running",
            Self::Approved => "approved",
            Self::Merged => "merged",
            Self::Closed => "closed",
        }
    }

    /// Returns the human-readable badge text, e.g. `checks running`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::ChecksRunning => "checks running",
            Self::Approved => "approved",
            Self::Merged => "merged",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for PullRequestStatus {
    type Error = ParsePullRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "open" => Ok(Self::Open),
            "checks-running" => Ok(Self::ChecksRunning),
            "approved" => Ok(Self::Approved),
            "merged" => Ok(Self::Merged),
            "closed" => Ok(Self::Closed),
            _ => Err(ParsePullRequestStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board member a task is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    /// Member identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Initials used when no avatar is available.
    pub initials: String,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    /// Creates an assignee without an avatar.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            initials: initials.into(),
            avatar: None,
        }
    }
}

/// Pull request linked to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// Review lifecycle status.
    pub status: PullRequestStatus,
    /// Pull request number in the remote tracker.
    pub number: u64,
}

/// Commit pushed to the task branch. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash.
    pub hash: String,
    /// First line of the commit message.
    pub message: String,
    /// Commit author display name.
    pub author: String,
    /// Commit time.
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    /// Returns the hash abbreviated to seven characters.
    #[must_use]
    pub fn short_hash(&self) -> String {
        self.hash.chars().take(7).collect()
    }
}

/// Task shown on the board.
///
/// Tasks are read-only inputs to the engine: every optional field is
/// independent and no field's presence implies another's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pull_request: Option<PullRequestInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    commits: Vec<Commit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_hours: Option<u32>,
    #[serde(default)]
    review_requested: bool,
    #[serde(default)]
    mentions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unread_comments: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epic: Option<String>,
}

impl Task {
    /// Creates a task with the required fields and no optional metadata.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        status: TaskStatus,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id,
            key: None,
            title: title.into(),
            description: None,
            status,
            priority,
            assignee: None,
            pull_request: None,
            branch: None,
            commits: Vec::new(),
            due_date: None,
            estimated_hours: None,
            completed_hours: None,
            review_requested: false,
            mentions: false,
            unread_comments: None,
            labels: Vec::new(),
            epic: None,
        }
    }

    /// Sets the human-facing task key, e.g. `AUTH-123`.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Links a pull request.
    #[must_use]
    pub const fn with_pull_request(mut self, pull_request: PullRequestInfo) -> Self {
        self.pull_request = Some(pull_request);
        self
    }

    /// Links a branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the commits pushed for this task, newest first.
    #[must_use]
    pub fn with_commits(mut self, commits: impl IntoIterator<Item = Commit>) -> Self {
        self.commits = commits.into_iter().collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets estimated and completed hours.
    #[must_use]
    pub const fn with_hours(mut self, estimated: u32, completed: u32) -> Self {
        self.estimated_hours = Some(estimated);
        self.completed_hours = Some(completed);
        self
    }

    /// Marks the task as awaiting the viewer's review.
    #[must_use]
    pub const fn with_review_requested(mut self, requested: bool) -> Self {
        self.review_requested = requested;
        self
    }

    /// Marks the task as mentioning the viewer.
    #[must_use]
    pub const fn with_mentions(mut self, mentions: bool) -> Self {
        self.mentions = mentions;
        self
    }

    /// Sets the unread comment count.
    #[must_use]
    pub const fn with_unread_comments(mut self, count: u32) -> Self {
        self.unread_comments = Some(count);
        self
    }

    /// Sets task labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the epic the task belongs to.
    #[must_use]
    pub fn with_epic(mut self, epic: impl Into<String>) -> Self {
        self.epic = Some(epic.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display key, falling back to the identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the linked pull request, if any.
    #[must_use]
    pub const fn pull_request(&self) -> Option<&PullRequestInfo> {
        self.pull_request.as_ref()
    }

    /// Returns the linked branch name, if any.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Returns commits in input order.
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the estimated hours, if any.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<u32> {
        self.estimated_hours
    }

    /// Returns the completed hours, if any.
    #[must_use]
    pub const fn completed_hours(&self) -> Option<u32> {
        self.completed_hours
    }

    /// Returns whether the viewer's review was requested.
    #[must_use]
    pub const fn review_requested(&self) -> bool {
        self.review_requested
    }

    /// Returns whether the task mentions the viewer.
    #[must_use]
    pub const fn mentions(&self) -> bool {
        self.mentions
    }

    /// Returns the unread comment count, if any.
    #[must_use]
    pub const fn unread_comments(&self) -> Option<u32> {
        self.unread_comments
    }

    /// Returns the task labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the epic, if any.
    #[must_use]
    pub fn epic(&self) -> Option<&str> {
        self.epic.as_deref()
    }

    /// Returns whether the task is assigned to `user`.
    #[must_use]
    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assignee
            .as_ref()
            .is_some_and(|assignee| &assignee.id == user)
    }

    /// Returns completion as a whole percentage of the estimate.
    ///
    /// `None` unless both hour values are present and non-zero. Completed
    /// hours above the estimate yield more than 100.
    #[must_use]
    pub fn progress_percent(&self) -> Option<u32> {
        let estimated = self.estimated_hours.filter(|hours| *hours > 0)?;
        let completed = self.completed_hours.filter(|hours| *hours > 0)?;
        let numerator = u64::from(completed)
            .saturating_mul(200)
            .saturating_add(u64::from(estimated));
        let rounded = numerator.checked_div(u64::from(estimated).saturating_mul(2))?;
        Some(u32::try_from(rounded).unwrap_or(u32::MAX))
    }
}
