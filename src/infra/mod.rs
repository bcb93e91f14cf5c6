//! Infrastructure adapters for ready-set backends.

pub mod queue;

pub use queue::{InMemoryReadyQueue, LinearReadyQueue};
