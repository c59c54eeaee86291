//! Shared plumbing: errors, the linear memory arena and timing.

pub mod error;
pub mod memory;
pub mod stopwatch;

pub use error::EngineError;
pub use memory::{LinearMemory, Region};
pub use stopwatch::Stopwatch;

