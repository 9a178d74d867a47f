//! Adapter implementations for board ports.

pub mod fixture;
pub mod memory;
pub mod timer;

pub use fixture::JsonFixtureSource;
pub use memory::{InMemoryTaskSource, RecordingDispatcher};
pub use timer::TokioDismissTimer;
