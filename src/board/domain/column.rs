//! Column grouping and bottleneck detection.

use super::{BoardConfig, Task, TaskStatus, ViewMode, is_relevant};

/// Task placed in a column together with its relevance to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEntry<'a> {
    /// The task.
    pub task: &'a Task,
    /// Whether the task matters to the viewer; irrelevant tasks stay in the
    /// column and are only de-emphasised.
    pub relevant: bool,
}

/// Board column derived from the task list. Columns carry no identity beyond
/// their status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    status: TaskStatus,
    entries: Vec<ColumnEntry<'a>>,
    has_bottleneck: bool,
}

impl<'a> Column<'a> {
    /// Returns the status key.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the entries in task-list order.
    #[must_use]
    pub fn entries(&self) -> &[ColumnEntry<'a>] {
        &self.entries
    }

    /// Returns the number of tasks in the column, dimmed tasks included.
    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of tasks relevant to the viewer.
    #[must_use]
    pub fn relevant_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.relevant).count()
    }

    /// Returns whether the column holds more tasks than the threshold.
    #[must_use]
    pub const fn has_bottleneck(&self) -> bool {
        self.has_bottleneck
    }
}

/// Groups `tasks` into one column per status in canonical order.
///
/// Every task lands in exactly one column. In My View the columns still list
/// every task of their status; `relevant` marks the ones the viewer cares
/// about.
#[must_use]
pub fn build_columns<'a>(
    tasks: &'a [Task],
    view_mode: ViewMode,
    config: &BoardConfig,
) -> Vec<Column<'a>> {
    TaskStatus::ALL
        .iter()
        .map(|status| {
            let entries: Vec<ColumnEntry<'a>> = tasks
                .iter()
                .filter(|task| task.status() == *status)
                .map(|task| ColumnEntry {
                    task,
                    relevant: is_relevant(task, view_mode, &config.current_user),
                })
                .collect();
            let has_bottleneck = entries.len() > config.bottleneck_threshold;
            Column {
                status: *status,
                entries,
                has_bottleneck,
            }
        })
        .collect()
}
