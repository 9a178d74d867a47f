//! Step definitions for next-action suggestion scenarios.

pub mod then;
pub mod when;
