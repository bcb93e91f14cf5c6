//! In-memory ready queue ordered by landing priority.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{ReadyPlane, ReadyQueue};

/// Wrapper to make `ReadyPlane` orderable by priority (highest first) and by
/// insertion rank within equal priority.
#[derive(Debug)]
struct PriorityPlane(ReadyPlane);

impl PartialEq for PriorityPlane {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityPlane {}

impl PartialOrd for PriorityPlane {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityPlane {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower rank wins ties (reversed for max-heap)
        self.0
            .plane
            .priority_cmp(&other.0.plane)
            .then_with(|| other.0.rank.cmp(&self.0.rank))
    }
}

/// In-memory ready set storing planes in a priority heap.
/// This provides O(log n) push and O(log n) pop operations.
#[derive(Debug, Default)]
pub struct InMemoryReadyQueue {
    planes: BinaryHeap<PriorityPlane>,
}

impl InMemoryReadyQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` planes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            planes: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl ReadyQueue for InMemoryReadyQueue {
    fn push(&mut self, ready: ReadyPlane) {
        self.planes.push(PriorityPlane(ready));
    }

    fn pop(&mut self) -> Option<ReadyPlane> {
        self.planes.pop().map(|entry| entry.0)
    }

    fn len(&self) -> usize {
        self.planes.len()
    }
}
