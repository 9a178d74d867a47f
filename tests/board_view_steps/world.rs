//! Shared world state for board visibility BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use wesync::board::{
    adapters::{InMemoryTaskSource, RecordingDispatcher, TokioDismissTimer},
    domain::{
        Assignee, BoardConfig, BoardEvent, RenderModel, Task, TaskCard, TaskId, TaskPriority,
        TaskStatus, UserId, ViewMode,
    },
    ports::BoardSnapshot,
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemoryTaskSource, RecordingDispatcher, TokioDismissTimer, DefaultClock>;

/// Scenario world for board visibility behaviour tests.
#[derive(Default)]
pub struct BoardViewWorld {
    pub tasks: Vec<Task>,
    pub service: Option<TestBoardService>,
    pub model: Option<RenderModel>,
}

impl BoardViewWorld {
    /// Loads the accumulated tasks for `viewer` and selects `view_mode`.
    pub fn open(&mut self, viewer: &str, view_mode: ViewMode) -> Result<(), eyre::Report> {
        let viewer = UserId::new(viewer).wrap_err("viewer id")?;
        let (timer, _expired) = TokioDismissTimer::channel();
        let mut service = BoardService::new(
            Arc::new(InMemoryTaskSource::new(BoardSnapshot::new(self.tasks.clone()))),
            Arc::new(RecordingDispatcher::new()),
            Arc::new(timer),
            Arc::new(DefaultClock),
            BoardConfig::default().for_user(viewer),
        );
        run_async(service.refresh()).wrap_err("refresh board")?;
        run_async(service.handle(BoardEvent::SelectView(view_mode))).wrap_err("select view")?;
        self.service = Some(service);
        Ok(())
    }

    /// Returns the opened service.
    pub fn service_mut(&mut self) -> Result<&mut TestBoardService, eyre::Report> {
        self.service
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board has not been opened in scenario world"))
    }

    /// Returns the last rendered model.
    pub fn model(&self) -> Result<&RenderModel, eyre::Report> {
        self.model
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been rendered in scenario world"))
    }

    /// Returns every rendered card.
    pub fn cards(&self) -> Result<Vec<&TaskCard>, eyre::Report> {
        Ok(self
            .model()?
            .columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .collect())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardViewWorld {
    BoardViewWorld::default()
}

/// Builds a medium-priority task titled after its identifier.
pub fn task(id: &str, status: TaskStatus) -> Result<Task, eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id")?;
    Ok(Task::new(
        task_id,
        format!("Task {id}"),
        status,
        TaskPriority::Medium,
    ))
}

/// Builds an assignee for `user`.
pub fn assignee(user: &str) -> Result<Assignee, eyre::Report> {
    let id = UserId::new(user).wrap_err("assignee id")?;
    Ok(Assignee::new(id, format!("Member {user}"), "MB"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
