//! Ready-set backends.

pub mod linear;
pub mod memory;

pub use linear::LinearReadyQueue;
pub use memory::InMemoryReadyQueue;
