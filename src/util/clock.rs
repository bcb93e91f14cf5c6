//! Logical simulation clock.
//!
//! Time in the simulation is a plain tick counter. Nothing here reads the wall
//! clock; pacing lives in [`crate::runtime::pacing`] and cannot move time.

use serde::{Deserialize, Serialize};

/// A point (or a span) on the logical clock.
pub type Tick = u64;

/// Monotonic logical clock owned by a single simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalClock {
    now: Tick,
}

impl LogicalClock {
    /// Create a clock starting at tick zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Current logical time.
    #[must_use]
    pub const fn now(&self) -> Tick {
        self.now
    }

    /// Advance by a single tick (idle or delayed step).
    pub const fn tick(&mut self) {
        self.advance(1);
    }

    /// Advance by `span` ticks, saturating at `Tick::MAX`.
    pub const fn advance(&mut self, span: Tick) {
        self.now = self.now.saturating_add(span);
    }
}
