//! Time-of-day contextual labels for My View.

use super::ViewMode;
use chrono::Timelike;
use mockable::Clock;
use serde::Serialize;
use std::fmt;

/// Hour at which the afternoon bracket starts.
const AFTERNOON_START: u32 = 12;

/// Hour at which the evening bracket starts.
const EVENING_START: u32 = 17;

/// Badge describing what the current part of the day is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContextualLabel {
    /// Morning, `[0, 12)`.
    #[serde(rename = "Today's Focus")]
    TodaysFocus,
    /// Afternoon, `[12, 17)`.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Evening, `[17, 24)`.
    #[serde(rename = "Tomorrow's Prep")]
    TomorrowsPrep,
}

impl ContextualLabel {
    /// Returns the badge text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TodaysFocus => "Today's Focus",
            Self::InProgress => "In Progress",
            Self::TomorrowsPrep => "Tomorrow's Prep",
        }
    }
}

impl fmt::Display for ContextualLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the label for `hour` under `view_mode`.
///
/// Team Space never shows a label. The label is computed on each call and
/// is not refreshed as the clock advances.
#[must_use]
pub const fn contextual_label(hour: u32, view_mode: ViewMode) -> Option<ContextualLabel> {
    match view_mode {
        ViewMode::TeamSpace => None,
        ViewMode::MyView if hour < AFTERNOON_START => Some(ContextualLabel::TodaysFocus),
        ViewMode::MyView if hour < EVENING_START => Some(ContextualLabel::InProgress),
        ViewMode::MyView => Some(ContextualLabel::TomorrowsPrep),
    }
}

/// Reads the local wall-clock hour from `clock`.
#[must_use]
pub fn hour_of(clock: &impl Clock) -> u32 {
    clock.local().hour()
}
