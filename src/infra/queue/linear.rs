//! Unordered ready set that scans for the best plane on every pop.

use std::cmp::Ordering;

use crate::core::{ReadyPlane, ReadyQueue};

/// Vector-backed ready set: O(1) push, O(n) pop.
///
/// Cheaper than the heap for the handful of planes a scenario holds at once.
#[derive(Debug, Default)]
pub struct LinearReadyQueue {
    planes: Vec<ReadyPlane>,
}

impl LinearReadyQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn outranks(a: &ReadyPlane, b: &ReadyPlane) -> bool {
    match a.plane.priority_cmp(&b.plane) {
        Ordering::Equal => a.rank < b.rank,
        ordering => ordering == Ordering::Greater,
    }
}

impl ReadyQueue for LinearReadyQueue {
    fn push(&mut self, ready: ReadyPlane) {
        self.planes.push(ready);
    }

    fn pop(&mut self) -> Option<ReadyPlane> {
        let mut best = 0;
        for (index, candidate) in self.planes.iter().enumerate().skip(1) {
            if outranks(candidate, &self.planes[best]) {
                best = index;
            }
        }
        if self.planes.is_empty() {
            None
        } else {
            Some(self.planes.swap_remove(best))
        }
    }

    fn len(&self) -> usize {
        self.planes.len()
    }
}
