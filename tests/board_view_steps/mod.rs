//! Step definitions for board visibility scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
