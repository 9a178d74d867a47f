//! Tokio-backed auto-dismiss timer.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::board::{domain::SuggestionId, ports::DismissScheduler};

/// Single-slot timer that sends expired suggestion identifiers over a channel.
///
/// Arming aborts the pending sleep task before spawning a new one, so at
/// most one timeout is in flight. Must be used inside a Tokio runtime.
#[derive(Debug)]
pub struct TokioDismissTimer {
    expired: UnboundedSender<SuggestionId>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TokioDismissTimer {
    /// Creates a timer and the receiver its timeouts are delivered on.
    #[must_use]
    pub fn channel() -> (Self, UnboundedReceiver<SuggestionId>) {
        let (expired, receiver) = unbounded_channel();
        let timer = Self {
            expired,
            pending: Mutex::new(None),
        };
        (timer, receiver)
    }

    /// Returns whether a timeout is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl DismissScheduler for TokioDismissTimer {
    fn arm(&self, suggestion: SuggestionId, delay: Duration) {
        let expired = self.expired.clone();
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if expired.send(suggestion).is_err() {
                debug!(suggestion_id = %suggestion, "timeout receiver dropped");
            }
        }));
        debug!(suggestion_id = %suggestion, delay_ms = delay.as_millis(), "auto-dismiss armed");
    }

    fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            debug!("auto-dismiss cancelled");
        }
    }
}

impl Drop for TokioDismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
