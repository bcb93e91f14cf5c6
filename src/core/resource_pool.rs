//! Linear airspace pool with first-fit placement and a capacity safety gate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;

/// Default airspace capacity used by the reference scenarios.
pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-size run of airspace cells.
///
/// Cells carry no owner. `allocate` hands back only a start offset, and the
/// caller keeps the `(start, size)` pair to release it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// `true` marks an occupied cell.
    cells: Vec<bool>,
}

impl ResourcePool {
    /// Create an empty pool of `capacity` cells.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![false; capacity],
        }
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of free cells, wherever they are.
    #[must_use]
    pub fn free_units(&self) -> usize {
        self.cells.iter().filter(|occupied| !**occupied).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn used_units(&self) -> usize {
        self.capacity() - self.free_units()
    }

    /// Whether the cell at `index` is occupied. Out-of-range cells read as free.
    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Coarse admission gate: enough free cells in aggregate.
    ///
    /// Contiguity is not considered, so a `true` here can still be followed by
    /// [`SchedulerError::NotFound`] from [`Self::allocate`] on a fragmented pool.
    #[must_use]
    pub fn is_safe(&self, requested: usize) -> bool {
        self.free_units() >= requested
    }

    /// [`Self::is_safe`] as a `Result`, carrying the free count on failure.
    pub fn ensure_safe(&self, requested: usize) -> Result<(), SchedulerError> {
        if self.is_safe(requested) {
            Ok(())
        } else {
            Err(SchedulerError::Unsafe {
                requested,
                free: self.free_units(),
            })
        }
    }

    /// Occupy the lowest-offset run of `size` free cells and return its start.
    ///
    /// Every candidate window has exactly the requested width, so best-fit
    /// collapses to first-fit.
    pub fn allocate(&mut self, size: usize) -> Result<usize, SchedulerError> {
        if size == 0 {
            return Err(SchedulerError::OutOfRange {
                start: 0,
                size,
                capacity: self.capacity(),
            });
        }
        let start = self
            .first_fit(size)
            .ok_or(SchedulerError::NotFound { size })?;
        self.cells[start..start + size].fill(true);
        tracing::trace!("allocated {} units at offset {}", size, start);
        Ok(start)
    }

    /// Free `[start, start + size)`.
    ///
    /// Cells are not checked for prior occupancy; a wrong pair silently frees
    /// someone else's range, which is the caller's bookkeeping bug.
    pub fn deallocate(&mut self, start: usize, size: usize) -> Result<(), SchedulerError> {
        let range = self.checked_range(start, size)?;
        self.cells[range].fill(false);
        tracing::trace!("released {} units at offset {}", size, start);
        Ok(())
    }

    /// Occupy a caller-chosen range, failing if any cell is already taken.
    pub fn reserve(&mut self, start: usize, size: usize) -> Result<(), SchedulerError> {
        let range = self.checked_range(start, size)?;
        if self.cells[range.clone()].iter().any(|occupied| *occupied) {
            return Err(SchedulerError::Occupied { start, size });
        }
        self.cells[range].fill(true);
        Ok(())
    }

    /// Lengths of the maximal free runs, left to right.
    #[must_use]
    pub fn free_runs(&self) -> Vec<usize> {
        self.cells
            .split(|occupied| *occupied)
            .map(<[bool]>::len)
            .filter(|len| *len > 0)
            .collect()
    }

    fn first_fit(&self, size: usize) -> Option<usize> {
        let mut run = 0;
        for (index, occupied) in self.cells.iter().enumerate() {
            if *occupied {
                run = 0;
                continue;
            }
            run += 1;
            if run == size {
                return Some(index + 1 - size);
            }
        }
        None
    }

    fn checked_range(
        &self,
        start: usize,
        size: usize,
    ) -> Result<std::ops::Range<usize>, SchedulerError> {
        let end = start.checked_add(size).filter(|end| size > 0 && *end <= self.capacity());
        end.map(|end| start..end).ok_or(SchedulerError::OutOfRange {
            start,
            size,
            capacity: self.capacity(),
        })
    }
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Renders cells as `#` (occupied) and `.` (free), space separated.
impl fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, occupied) in self.cells.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if *occupied { "#" } else { "." })?;
        }
        Ok(())
    }
}
