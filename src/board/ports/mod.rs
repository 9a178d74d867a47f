//! Port contracts for the board engine.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod dispatcher;
pub mod scheduler;
pub mod source;

pub use dispatcher::{DispatchError, DispatchResult, NextActionDispatcher};
pub use scheduler::DismissScheduler;
pub use source::{BoardSnapshot, TaskSource, TaskSourceError, TaskSourceResult};
