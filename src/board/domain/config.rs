//! Static board configuration.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of tasks a column may hold before it is flagged.
pub const DEFAULT_BOTTLENECK_THRESHOLD: usize = 8;

/// Default delay before an unanswered suggestion is dismissed.
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 10_000;

/// Member identifier used when no viewer is configured.
pub const DEFAULT_CURRENT_USER: &str = "user-1";

/// Tunable board settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Column size above which a column is flagged as a bottleneck.
    pub bottleneck_threshold: usize,
    /// Auto-dismiss delay for suggestions, in milliseconds.
    pub auto_dismiss_ms: u64,
    /// Member whose perspective drives My View.
    pub current_user: UserId,
    /// Display name offered by the assignee-match stub.
    pub assignee_match_name: String,
    /// Confidence shown next to the assignee-match stub, in percent.
    pub assignee_match_confidence: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            bottleneck_threshold: DEFAULT_BOTTLENECK_THRESHOLD,
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            current_user: UserId::from_trusted(DEFAULT_CURRENT_USER),
            assignee_match_name: "Sarah Chen".to_owned(),
            assignee_match_confidence: 92,
        }
    }
}

impl BoardConfig {
    /// Returns the configured auto-dismiss delay.
    #[must_use]
    pub const fn auto_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }

    /// Returns a copy of the configuration viewed by `user`.
    #[must_use]
    pub fn for_user(mut self, user: UserId) -> Self {
        self.current_user = user;
        self
    }
}
