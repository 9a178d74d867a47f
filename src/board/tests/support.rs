//! Shared builders for board unit tests.

use crate::board::domain::{Assignee, Task, TaskId, TaskPriority, TaskStatus, UserId};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

pub(super) const CURRENT_USER: &str = "user-1";

pub(super) fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

pub(super) fn task_id(id: &str) -> TaskId {
    TaskId::new(id).expect("valid task id")
}

pub(super) fn task(id: &str, status: TaskStatus) -> Task {
    Task::new(task_id(id), format!("Task {id}"), status, TaskPriority::Medium)
}

pub(super) fn assignee(id: &str, name: &str, initials: &str) -> Assignee {
    Assignee::new(user(id), name, initials)
}

pub(super) fn mine(task: Task) -> Task {
    task.with_assignee(assignee(CURRENT_USER, "Alex Kim", "AK"))
}

pub(super) fn theirs(task: Task) -> Task {
    task.with_assignee(assignee("user-2", "Sam Lee", "SL"))
}

/// Ten tasks of which exactly three are relevant to `user-1`: one assigned,
/// one requesting review, one mentioning.
pub(super) fn ten_task_board() -> Vec<Task> {
    vec![
        mine(task("t1", TaskStatus::Todo)),
        theirs(task("t2", TaskStatus::Todo)),
        task("t3", TaskStatus::Backlog),
        theirs(task("t4", TaskStatus::InProgress)).with_review_requested(true),
        theirs(task("t5", TaskStatus::InProgress)),
        task("t6", TaskStatus::InReview).with_mentions(true),
        theirs(task("t7", TaskStatus::InReview)),
        theirs(task("t8", TaskStatus::Done)),
        task("t9", TaskStatus::Backlog),
        theirs(task("t10", TaskStatus::Done)),
    ]
}

/// Clock pinned to a local wall-clock hour on a fixed day.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock {
    local: DateTime<Local>,
}

impl FixedClock {
    pub(super) fn at_hour(hour: u32) -> Self {
        let local = Local
            .with_ymd_and_hms(2026, 3, 2, hour, 30, 0)
            .single()
            .expect("unambiguous local time");
        Self { local }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.local
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }
}
