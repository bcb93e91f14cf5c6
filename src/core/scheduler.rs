//! Ready set and priority selection.

use crate::core::plane::Plane;
use crate::infra::queue::InMemoryReadyQueue;

/// A plane sitting in the ready set, tagged with its insertion rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPlane {
    /// The waiting plane.
    pub plane: Plane,
    /// Order in which the plane first entered the scheduler; lower wins ties.
    pub rank: u64,
}

/// Abstraction for ready-set backends.
///
/// `pop` must return the plane with the greatest [`Plane::priority_cmp`],
/// falling back to the lowest `rank` on a full tie.
pub trait ReadyQueue {
    /// Insert a ready plane.
    fn push(&mut self, ready: ReadyPlane);
    /// Remove and return the highest-priority plane.
    fn pop(&mut self) -> Option<ReadyPlane>;
    /// Current number of ready planes.
    fn len(&self) -> usize;
    /// Whether no plane is ready.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Priority scheduler over a ready-set backend.
///
/// Every [`Scheduler::add_plane`] hands out a fresh rank. A delayed plane goes
/// back through [`Scheduler::requeue`] with the rank it was popped with, so it
/// does not lose its place among equals.
#[derive(Debug)]
pub struct Scheduler<Q = InMemoryReadyQueue> {
    queue: Q,
    next_rank: u64,
}

impl Scheduler<InMemoryReadyQueue> {
    /// Scheduler backed by the binary-heap queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queue(InMemoryReadyQueue::new())
    }
}

impl Default for Scheduler<InMemoryReadyQueue> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: ReadyQueue> Scheduler<Q> {
    /// Scheduler over a caller-supplied backend.
    pub fn with_queue(queue: Q) -> Self {
        Self { queue, next_rank: 0 }
    }

    /// Put a newly arrived plane into the ready set behind every plane
    /// already added.
    pub fn add_plane(&mut self, plane: Plane) {
        let rank = self.next_rank;
        self.next_rank += 1;
        self.queue.push(ReadyPlane { plane, rank });
    }

    /// Put a plane taken by [`Self::next_ready`] back, keeping its rank.
    pub fn requeue(&mut self, ready: ReadyPlane) {
        self.queue.push(ready);
    }

    /// Remove and return the highest-priority ready plane with its rank.
    pub fn next_ready(&mut self) -> Option<ReadyPlane> {
        self.queue.pop()
    }

    /// Remove and return the highest-priority ready plane, or `None` when the
    /// ready set is empty.
    pub fn next_plane(&mut self) -> Option<Plane> {
        self.next_ready().map(|ready| ready.plane)
    }

    /// Number of ready planes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the ready set is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
