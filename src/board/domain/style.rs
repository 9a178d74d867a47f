//! Style-key lookup tables consumed by the renderer.
//!
//! The keys are opaque class names; the engine only looks them up. Both
//! tables are exhaustive matches so a new enum member cannot ship without
//! its styling.

use super::{PullRequestStatus, TaskPriority};
use serde::Serialize;

/// Style keys for a priority indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityStyle {
    /// Indicator fill.
    pub color: &'static str,
    /// Indicator ring.
    pub ring: &'static str,
    /// Text colour for priority badges.
    pub text: &'static str,
}

/// Style keys for a pull request status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PullRequestStyle {
    /// Badge text colour.
    pub color: &'static str,
    /// Badge background.
    pub background: &'static str,
}

impl TaskPriority {
    /// Returns the style keys for this priority.
    #[must_use]
    pub const fn style(self) -> PriorityStyle {
        match self {
            Self::Low => PriorityStyle {
                color: "bg-slate-300",
                ring: "ring-slate-100",
                text: "text-slate-600",
            },
            Self::Medium => PriorityStyle {
                color: "bg-amber-400",
                ring: "ring-amber-100",
                text: "text-amber-700",
            },
            Self::High => PriorityStyle {
                color: "bg-orange-500",
                ring: "ring-orange-100",
                text: "text-orange-700",
            },
            Self::Critical => PriorityStyle {
                color: "bg-red-500",
                ring: "ring-red-100",
                text: "text-red-700",
            },
        }
    }
}

impl PullRequestStatus {
    /// Returns the style keys for this status.
    #[must_use]
    pub const fn style(self) -> PullRequestStyle {
        match self {
            Self::Draft => PullRequestStyle {
                color: "text-gray-600",
                background: "bg-gray-100",
            },
            Self::Open => PullRequestStyle {
                color: "text-blue-700",
                background: "bg-blue-50",
            },
            Self::ChecksRunning => PullRequestStyle {
                color: "text-amber-700",
                background: "bg-amber-50",
            },
            Self::Approved => PullRequestStyle {
                color: "text-emerald-700",
                background: "bg-emerald-50",
            },
            Self::Merged => PullRequestStyle {
                color: "text-purple-700",
                background: "bg-purple-50",
            },
            Self::Closed => PullRequestStyle {
                color: "text-red-700",
                background: "bg-red-50",
            },
        }
    }
}
