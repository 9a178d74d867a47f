//! When steps for board visibility BDD scenarios.

use super::world::{BoardViewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use wesync::board::domain::{BoardEvent, TaskId, ViewMode};

const MORNING: u32 = 9;

fn open_and_render(
    world: &mut BoardViewWorld,
    viewer: &str,
    view_mode: ViewMode,
    hour: u32,
) -> Result<(), eyre::Report> {
    world.open(viewer, view_mode)?;
    let model = world.service_mut()?.render_at(hour);
    world.model = Some(model);
    Ok(())
}

#[when(r#""{viewer}" opens Team Space"#)]
fn opens_team_space(world: &mut BoardViewWorld, viewer: String) -> Result<(), eyre::Report> {
    open_and_render(world, &viewer, ViewMode::TeamSpace, MORNING)
}

#[when(r#""{viewer}" opens My View"#)]
fn opens_my_view(world: &mut BoardViewWorld, viewer: String) -> Result<(), eyre::Report> {
    open_and_render(world, &viewer, ViewMode::MyView, MORNING)
}

#[when(r#""{viewer}" opens My View at hour {hour:u32}"#)]
fn opens_my_view_at(
    world: &mut BoardViewWorld,
    viewer: String,
    hour: u32,
) -> Result<(), eyre::Report> {
    open_and_render(world, &viewer, ViewMode::MyView, hour)
}

#[when(r#"task "{id}" is opened"#)]
fn task_is_opened(world: &mut BoardViewWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id")?;
    let service = world.service_mut()?;
    run_async(service.handle(BoardEvent::SelectTask(task_id))).wrap_err("select task")?;
    let model = service.render_at(MORNING);
    world.model = Some(model);
    Ok(())
}
