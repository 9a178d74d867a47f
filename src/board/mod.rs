//! Board visibility and interaction state for the `WeSync` kanban board.
//!
//! The module decides which tasks each view shows, groups them into
//! columns, tracks drag, suggestion and focus state, and aggregates it all
//! into a render model. It follows hexagonal architecture:
//!
//! - Domain types and the pure engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
