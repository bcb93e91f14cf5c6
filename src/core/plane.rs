//! Plane model and the landing priority order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;
use crate::util::clock::Tick;

/// Unique plane identifier within a run.
pub type PlaneId = u32;

/// Fuel level at or below which a non-emergency plane is reported as high priority.
pub const LOW_FUEL_THRESHOLD: u32 = 2;

/// A plane requesting a landing slot.
///
/// `fuel` only ranks planes against each other (lower lands first); the
/// simulation never burns it down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    /// Unique identifier.
    pub id: PlaneId,
    /// Tick at which the plane becomes eligible for scheduling.
    pub arrival_time: Tick,
    /// Remaining fuel; lower is more urgent.
    pub fuel: u32,
    /// Contiguous airspace units the plane occupies.
    pub footprint: usize,
    /// Ticks the plane holds its airspace once scheduled.
    pub landing_time: Tick,
    /// Emergencies outrank every non-emergency plane.
    #[serde(default)]
    pub emergency: bool,
}

/// Display class used in plane tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    /// Emergency flag set.
    Emergency,
    /// Fuel at or below [`LOW_FUEL_THRESHOLD`].
    High,
    /// Everything else.
    Normal,
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Emergency => "Emergency",
            Self::High => "High",
            Self::Normal => "Normal",
        };
        f.write_str(label)
    }
}

impl Plane {
    /// Create a non-emergency plane.
    #[must_use]
    pub const fn new(
        id: PlaneId,
        arrival_time: Tick,
        fuel: u32,
        footprint: usize,
        landing_time: Tick,
    ) -> Self {
        Self {
            id,
            arrival_time,
            fuel,
            footprint,
            landing_time,
            emergency: false,
        }
    }

    /// Mark the plane as an emergency.
    #[must_use]
    pub const fn with_emergency(mut self) -> Self {
        self.emergency = true;
        self
    }

    /// Display class for reports.
    #[must_use]
    pub const fn priority_class(&self) -> PriorityClass {
        if self.emergency {
            PriorityClass::Emergency
        } else if self.fuel <= LOW_FUEL_THRESHOLD {
            PriorityClass::High
        } else {
            PriorityClass::Normal
        }
    }

    /// Compare landing priority. `Greater` means `self` lands first.
    ///
    /// Emergency beats non-emergency, then lower fuel, then the shorter
    /// landing. Planes equal on all three compare `Equal`; callers break that
    /// tie themselves.
    #[must_use]
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.emergency
            .cmp(&other.emergency)
            .then_with(|| other.fuel.cmp(&self.fuel))
            .then_with(|| other.landing_time.cmp(&self.landing_time))
    }

    /// Check the plane can ever be placed in a pool of `capacity` units.
    pub fn validate(&self, capacity: usize) -> Result<(), SchedulerError> {
        if self.footprint == 0 {
            return Err(SchedulerError::InvalidPlane {
                id: self.id,
                reason: "footprint must be greater than 0".into(),
            });
        }
        if self.footprint > capacity {
            return Err(SchedulerError::InvalidPlane {
                id: self.id,
                reason: format!(
                    "footprint {} exceeds airspace capacity {capacity}",
                    self.footprint
                ),
            });
        }
        Ok(())
    }
}
