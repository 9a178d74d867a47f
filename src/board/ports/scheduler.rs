//! Scheduler port for suggestion auto-dismissal.

use crate::board::domain::SuggestionId;
use std::time::Duration;

/// One-slot cancellable timer.
///
/// When a timer fires, the implementation delivers the armed
/// [`SuggestionId`] back to the session owner, which feeds it in as
/// [`crate::board::domain::BoardEvent::SuggestionTimedOut`].
#[cfg_attr(test, mockall::automock)]
pub trait DismissScheduler: Send + Sync {
    /// Arms the timer for `suggestion`, cancelling any pending timer first.
    fn arm(&self, suggestion: SuggestionId, delay: Duration);

    /// Cancels the pending timer. No-op when nothing is pending.
    fn cancel(&self);
}
