//! `WeSync`: task visibility and interaction state for a kanban board.
//!
//! This crate derives everything a kanban renderer needs from a task list:
//! which tasks a member sees and how prominently, how they group into
//! columns, which column is a bottleneck, and the transient drag, focus and
//! next-action suggestion state driven by user interaction.
//!
//! # Architecture
//!
//! `WeSync` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and projections with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for task sources, timers and
//!   suggestion dispatch
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON
//!   fixtures, Tokio timers)
//!
//! # Modules
//!
//! - [`board`]: View filtering, columns, suggestions and the board service

pub mod board;
