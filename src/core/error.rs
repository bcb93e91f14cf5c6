//! Error types for scheduler operations.

use thiserror::Error;

use crate::core::plane::PlaneId;

/// Errors produced by scheduler components.
///
/// `NotFound` and `Unsafe` are retryable: the simulation re-queues the plane
/// and moves on. Everything else aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// No contiguous run of free cells is long enough.
    #[error("no free window of {size} units in airspace")]
    NotFound {
        /// Units requested.
        size: usize,
    },
    /// Aggregate free capacity is below the request.
    #[error("unsafe allocation: requested {requested} units, {free} free")]
    Unsafe {
        /// Units requested.
        requested: usize,
        /// Free units at the time of the check.
        free: usize,
    },
    /// Range lies outside the pool or is empty.
    #[error("range {start}..{start}+{size} out of range for capacity {capacity}")]
    OutOfRange {
        /// First cell of the range.
        start: usize,
        /// Length of the range.
        size: usize,
        /// Pool capacity.
        capacity: usize,
    },
    /// Range overlaps cells that are already occupied.
    #[error("range {start}..{start}+{size} is already occupied")]
    Occupied {
        /// First cell of the range.
        start: usize,
        /// Length of the range.
        size: usize,
    },
    /// Plane attributes violate an invariant.
    #[error("invalid plane {id}: {reason}")]
    InvalidPlane {
        /// Offending plane.
        id: PlaneId,
        /// What is wrong with it.
        reason: String,
    },
    /// Two planes share an id.
    #[error("duplicate plane id {0}")]
    DuplicatePlane(PlaneId),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The run exceeded its configured step budget.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded {
        /// Configured limit.
        limit: u64,
    },
}

impl SchedulerError {
    /// Whether the simulation retries the plane instead of aborting.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Unsafe { .. })
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
