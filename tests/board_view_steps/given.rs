//! Given steps for board visibility BDD scenarios.

use super::world::{BoardViewWorld, assignee, task};
use rstest_bdd_macros::given;
use wesync::board::domain::TaskStatus;

#[given(r#"a board of ten tasks where three involve "{viewer}""#)]
fn ten_task_board(world: &mut BoardViewWorld, viewer: String) -> Result<(), eyre::Report> {
    let other = if viewer == "user-2" { "user-3" } else { "user-2" };
    world.tasks = vec![
        task("t1", TaskStatus::Todo)?.with_assignee(assignee(&viewer)?),
        task("t2", TaskStatus::Todo)?.with_assignee(assignee(other)?),
        task("t3", TaskStatus::Backlog)?,
        task("t4", TaskStatus::InProgress)?
            .with_assignee(assignee(other)?)
            .with_review_requested(true),
        task("t5", TaskStatus::InProgress)?.with_assignee(assignee(other)?),
        task("t6", TaskStatus::InReview)?.with_mentions(true),
        task("t7", TaskStatus::InReview)?.with_assignee(assignee(other)?),
        task("t8", TaskStatus::Done)?.with_assignee(assignee(other)?),
        task("t9", TaskStatus::Backlog)?,
        task("t10", TaskStatus::Done)?.with_assignee(assignee(other)?),
    ];
    Ok(())
}

#[given(r#"{count:usize} unassigned tasks in "{status}""#)]
fn unassigned_tasks(
    world: &mut BoardViewWorld,
    count: usize,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let offset = world.tasks.len();
    for index in 0..count {
        let id = format!("{status}-{}", offset.saturating_add(index));
        world.tasks.push(task(&id, parsed)?);
    }
    Ok(())
}
