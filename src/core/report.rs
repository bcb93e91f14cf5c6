//! Step outcomes, the runway timeline and the end-of-run report.

use serde::{Deserialize, Serialize};

use crate::core::plane::PlaneId;
use crate::core::simulation::Restriction;
use crate::util::clock::Tick;

/// Result of one loop iteration. Exactly one per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// No plane was ready.
    Idle,
    /// Safety gate refused the selected plane.
    DelayedUnsafe {
        /// Plane delayed.
        plane_id: PlaneId,
        /// Units requested.
        requested: usize,
        /// Free units at the check.
        free: usize,
    },
    /// No contiguous window fit the selected plane.
    DelayedNoSpace {
        /// Plane delayed.
        plane_id: PlaneId,
        /// Units requested.
        requested: usize,
    },
    /// The selected plane landed.
    Scheduled {
        /// Plane scheduled.
        plane_id: PlaneId,
        /// Offset of its airspace window.
        offset: usize,
        /// Ticks the landing took.
        landing_time: Tick,
    },
}

impl StepOutcome {
    /// Whether the step re-queued a plane.
    #[must_use]
    pub const fn is_delay(&self) -> bool {
        matches!(self, Self::DelayedUnsafe { .. } | Self::DelayedNoSpace { .. })
    }
}

/// One step of the run, stamped with the time it started at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Logical time at the start of the step.
    pub time: Tick,
    /// What the step did.
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// A committed landing on the runway chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// 1-based commit index.
    pub step: usize,
    /// Plane that landed.
    pub plane_id: PlaneId,
    /// Sum of the landing times committed before this one.
    pub start: Tick,
    /// `start` plus this landing time.
    pub end: Tick,
    /// Logical time at which the plane was scheduled.
    pub scheduled_at: Tick,
}

/// Runway usage in commit order.
///
/// `start`/`end` accumulate landing times only, so idle and delayed ticks do
/// not show up as gaps; `scheduled_at` keeps the real clock value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a landing and return the entry.
    pub fn record(&mut self, plane_id: PlaneId, landing_time: Tick, scheduled_at: Tick) -> TimelineEntry {
        let start = self.total_duration();
        let entry = TimelineEntry {
            step: self.entries.len() + 1,
            plane_id,
            start,
            end: start.saturating_add(landing_time),
            scheduled_at,
        };
        self.entries.push(entry);
        entry
    }

    /// Entries in commit order.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Plane ids in commit order.
    #[must_use]
    pub fn plane_order(&self) -> Vec<PlaneId> {
        self.entries.iter().map(|entry| entry.plane_id).collect()
    }

    /// Sum of all committed landing times.
    #[must_use]
    pub fn total_duration(&self) -> Tick {
        self.entries.last().map_or(0, |entry| entry.end)
    }

    /// Number of landings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has landed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Scenario label.
    pub label: String,
    /// Airspace capacity.
    pub capacity: usize,
    /// Every step in order.
    pub steps: Vec<StepRecord>,
    /// Committed landings.
    pub timeline: Timeline,
    /// Logical time when the loop stopped.
    pub finished_at: Tick,
    /// Restrictions that were still active at the end.
    pub pending_restrictions: Vec<Restriction>,
}

impl SimulationReport {
    /// Steps that re-queued a plane.
    #[must_use]
    pub fn delay_count(&self) -> usize {
        self.steps.iter().filter(|step| step.outcome.is_delay()).count()
    }

    /// Steps where nothing was ready.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome == StepOutcome::Idle)
            .count()
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_cumulative() {
        let mut timeline = Timeline::new();
        timeline.record(1, 3, 0);
        timeline.record(4, 1, 7);
        let last = timeline.record(5, 3, 9);

        assert_eq!(last, TimelineEntry { step: 3, plane_id: 5, start: 4, end: 7, scheduled_at: 9 });
        assert_eq!(timeline.entries()[1].start, 3);
        assert_eq!(timeline.plane_order(), vec![1, 4, 5]);
        assert_eq!(timeline.total_duration(), 7);
    }

    #[test]
    fn test_zero_length_landing() {
        let mut timeline = Timeline::new();
        let entry = timeline.record(2, 0, 5);
        assert_eq!((entry.start, entry.end), (0, 0));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_report_counters() {
        let report = SimulationReport {
            label: "counters".into(),
            capacity: 20,
            steps: vec![
                StepRecord { time: 0, outcome: StepOutcome::Idle },
                StepRecord {
                    time: 1,
                    outcome: StepOutcome::DelayedNoSpace { plane_id: 1, requested: 6 },
                },
                StepRecord {
                    time: 2,
                    outcome: StepOutcome::Scheduled { plane_id: 1, offset: 0, landing_time: 2 },
                },
            ],
            timeline: Timeline::new(),
            finished_at: 4,
            pending_restrictions: Vec::new(),
        };
        assert_eq!(report.idle_count(), 1);
        assert_eq!(report.delay_count(), 1);
        assert!(report.to_json_pretty().unwrap().contains("delayed_no_space"));
    }
}
