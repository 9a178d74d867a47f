//! When steps for suggestion BDD scenarios.

use super::world::SuggestionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use wesync::board::domain::{BoardEvent, TaskId};

#[when(r#"task "{id}" is dragged and dropped"#)]
fn drag_and_drop(world: &mut SuggestionWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id")?;
    world.handle(BoardEvent::DragStart(task_id))?;
    world.handle(BoardEvent::DragEnd)
}

#[when("the suggestion is accepted")]
fn accept(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    world.handle(BoardEvent::SuggestionAction)
}

#[when("the suggestion is cancelled")]
fn cancel(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    world.handle(BoardEvent::SuggestionCancel)
}

#[when("the latest suggestion times out")]
fn latest_times_out(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let latest = *world
        .activated
        .last()
        .ok_or_else(|| eyre::eyre!("no suggestion has been shown"))?;
    let expired = world.await_timeout()?;
    eyre::ensure!(
        expired == latest,
        "timer expired {expired} instead of the latest suggestion {latest}"
    );
    Ok(())
}

#[when("the first suggestion times out")]
fn first_times_out(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let id = *world
        .activated
        .first()
        .ok_or_else(|| eyre::eyre!("no suggestion has been shown"))?;
    world.handle(BoardEvent::SuggestionTimedOut(id))
}

#[when(r#"an assignee match is requested for "{id}""#)]
fn request_assignee_match(world: &mut SuggestionWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id")?;
    world.handle(BoardEvent::RequestAssigneeMatch(task_id))
}
