//! Service owning a board session and executing its effects.

use crate::board::{
    domain::{
        BoardConfig, BoardEffect, BoardEvent, BoardSession, RenderModel, SuggestionId, Task,
        hour_of,
    },
    ports::{DismissScheduler, DispatchError, NextActionDispatcher, TaskSource, TaskSourceError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Loading the task snapshot failed.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
    /// Performing an accepted suggestion failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Single owner of a board session.
///
/// Holds the latest task snapshot, applies events to the session, and runs
/// the resulting effects against the scheduler and dispatcher in order.
pub struct BoardService<S, D, T, C>
where
    S: TaskSource,
    D: NextActionDispatcher,
    T: DismissScheduler,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    dispatcher: Arc<D>,
    scheduler: Arc<T>,
    clock: Arc<C>,
    session: BoardSession,
    tasks: Vec<Task>,
}

impl<S, D, T, C> BoardService<S, D, T, C>
where
    S: TaskSource,
    D: NextActionDispatcher,
    T: DismissScheduler,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty board.
    #[must_use]
    pub fn new(
        source: Arc<S>,
        dispatcher: Arc<D>,
        scheduler: Arc<T>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        Self {
            source,
            dispatcher,
            scheduler,
            clock,
            session: BoardSession::new(config),
            tasks: Vec::new(),
        }
    }

    /// Returns the current task snapshot.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the session state.
    #[must_use]
    pub const fn session(&self) -> &BoardSession {
        &self.session
    }

    /// Reloads the task snapshot and drops state tied to vanished tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Source`] when the snapshot cannot be
    /// loaded; the previous snapshot is kept.
    pub async fn refresh(&mut self) -> BoardServiceResult<()> {
        let snapshot = self.source.load().await?;
        if let Some(user) = snapshot.current_user {
            self.session.set_current_user(user);
        }
        self.tasks = snapshot.tasks;
        info!(tasks = self.tasks.len(), "board snapshot refreshed");
        let effects = self.session.reconcile(&self.tasks);
        self.execute(effects).await
    }

    /// Applies `event` and executes the effects it produces.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Dispatch`] when an accepted suggestion
    /// cannot be performed. The suggestion is cleared regardless.
    pub async fn handle(&mut self, event: BoardEvent) -> BoardServiceResult<()> {
        let effects = self.session.apply(&self.tasks, event);
        self.execute(effects).await
    }

    /// Waits for the next auto-dismiss timeout on `expired` and applies it.
    ///
    /// Returns the expired suggestion identifier, or `None` once the timer
    /// side of the channel is gone. Identifiers of superseded suggestions are
    /// returned but leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Propagates failures from executing the resulting effects.
    pub async fn apply_next_timeout(
        &mut self,
        expired: &mut UnboundedReceiver<SuggestionId>,
    ) -> BoardServiceResult<Option<SuggestionId>> {
        let Some(suggestion) = expired.recv().await else {
            debug!("auto-dismiss channel closed");
            return Ok(None);
        };
        self.handle(BoardEvent::SuggestionTimedOut(suggestion)).await?;
        Ok(Some(suggestion))
    }

    /// Builds the render model at the clock's current local hour.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        self.render_at(hour_of(&*self.clock))
    }

    /// Builds the render model at `hour`.
    #[must_use]
    pub fn render_at(&self, hour: u32) -> RenderModel {
        self.session.render(&self.tasks, hour)
    }

    async fn execute(&self, effects: Vec<BoardEffect>) -> BoardServiceResult<()> {
        for effect in effects {
            match effect {
                BoardEffect::ArmAutoDismiss { suggestion, delay } => {
                    self.scheduler.arm(suggestion, delay);
                }
                BoardEffect::CancelAutoDismiss => self.scheduler.cancel(),
                BoardEffect::PerformSuggestion(suggestion) => {
                    if let Err(error) = self.dispatcher.perform(&suggestion).await {
                        warn!(
                            %error,
                            suggestion_id = %suggestion.id(),
                            kind = %suggestion.kind(),
                            "suggestion could not be performed"
                        );
                        return Err(error.into());
                    }
                }
                BoardEffect::SuggestionDismissed(suggestion) => {
                    debug!(suggestion_id = %suggestion.id(), "suggestion closed without action");
                }
            }
        }
        Ok(())
    }
}
