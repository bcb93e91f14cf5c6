//! Simulation events and sink implementations.
//!
//! The simulation reports every state change to an optional [`EventSink`].
//! Sinks observe; they never feed back into scheduling decisions.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::plane::PlaneId;
use crate::util::clock::Tick;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// A restriction was lifted and its cells freed.
    RestrictionLifted {
        /// First cell of the restriction.
        start: usize,
        /// Cells freed.
        size: usize,
    },
    /// A plane arrived and entered the ready set.
    Admitted {
        /// Plane admitted.
        plane_id: PlaneId,
    },
    /// Nothing was ready; one tick passed.
    Idle,
    /// The scheduler picked a plane for this step.
    Selected {
        /// Plane selected.
        plane_id: PlaneId,
    },
    /// The safety gate refused the plane; it was re-queued.
    DelayedUnsafe {
        /// Plane delayed.
        plane_id: PlaneId,
        /// Units requested.
        requested: usize,
        /// Free units at the check.
        free: usize,
    },
    /// No contiguous window fit the plane; it was re-queued.
    DelayedNoSpace {
        /// Plane delayed.
        plane_id: PlaneId,
        /// Units requested.
        requested: usize,
    },
    /// The plane got airspace and is landing.
    Scheduled {
        /// Plane scheduled.
        plane_id: PlaneId,
        /// Offset of its airspace window.
        offset: usize,
        /// Units held.
        footprint: usize,
        /// Ticks held.
        landing_time: Tick,
    },
    /// The plane landed and its window was freed.
    Released {
        /// Plane released.
        plane_id: PlaneId,
        /// Offset of the freed window.
        offset: usize,
        /// Units freed.
        footprint: usize,
        /// Airspace after the release, `#` occupied and `.` free.
        airspace: String,
    },
}

/// An event stamped with the logical time it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Logical time.
    pub time: Tick,
    /// Event payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

impl SimulationEvent {
    /// Plane the event concerns, if any.
    #[must_use]
    pub fn plane_id(&self) -> Option<PlaneId> {
        match self.kind {
            EventKind::Admitted { plane_id }
            | EventKind::Selected { plane_id }
            | EventKind::DelayedUnsafe { plane_id, .. }
            | EventKind::DelayedNoSpace { plane_id, .. }
            | EventKind::Scheduled { plane_id, .. }
            | EventKind::Released { plane_id, .. } => Some(plane_id),
            EventKind::RestrictionLifted { .. } | EventKind::Idle => None,
        }
    }
}

/// Event sink abstraction.
pub trait EventSink: Send {
    /// Record an event.
    fn record(&mut self, event: &SimulationEvent);
}

/// In-memory event sink for testing and dev.
#[derive(Debug, Clone)]
pub struct InMemoryEventSink {
    events: VecDeque<SimulationEvent>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.iter().cloned().collect()
    }

    /// Number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded (or everything was evicted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: &SimulationEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
    }
}

/// Shared sink: the simulation owns one handle, the caller keeps another.
impl<S: EventSink + ?Sized> EventSink for Arc<Mutex<S>> {
    fn record(&mut self, event: &SimulationEvent) {
        self.lock().record(event);
    }
}

/// Fans each event out to several sinks in order.
#[derive(Default)]
pub struct CompositeSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl CompositeSink {
    /// Create an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    #[must_use]
    pub fn with(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EventSink for CompositeSink {
    fn record(&mut self, event: &SimulationEvent) {
        for sink in &mut self.sinks {
            sink.record(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle(time: Tick) -> SimulationEvent {
        SimulationEvent {
            time,
            kind: EventKind::Idle,
        }
    }

    #[test]
    fn test_bounded_sink_drops_oldest() {
        let mut sink = InMemoryEventSink::new(2);
        for time in 0..3 {
            sink.record(&idle(time));
        }
        let times: Vec<_> = sink.events().iter().map(|e| e.time).collect();
        assert_eq!(times, vec![1, 2]);
    }

    #[test]
    fn test_zero_capacity_sink_stores_nothing() {
        let mut sink = InMemoryEventSink::new(0);
        sink.record(&idle(0));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_shared_sink_handle() {
        let shared = Arc::new(Mutex::new(InMemoryEventSink::new(8)));
        let mut handle = Arc::clone(&shared);
        handle.record(&idle(4));
        assert_eq!(shared.lock().len(), 1);
    }

    #[test]
    fn test_composite_fans_out() {
        let left = Arc::new(Mutex::new(InMemoryEventSink::new(8)));
        let right = Arc::new(Mutex::new(InMemoryEventSink::new(8)));
        let mut composite = CompositeSink::new()
            .with(Box::new(Arc::clone(&left)))
            .with(Box::new(Arc::clone(&right)));
        composite.record(&idle(1));
        assert_eq!(left.lock().len(), 1);
        assert_eq!(right.lock().len(), 1);
    }

    #[test]
    fn test_event_json_shape() {
        let event = SimulationEvent {
            time: 3,
            kind: EventKind::Admitted { plane_id: 4 },
        };
        assert_eq!(event.plane_id(), Some(4));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["time"], 3);
        assert_eq!(json["kind"], "admitted");
        assert_eq!(json["plane_id"], 4);
        assert_eq!(idle(0).plane_id(), None);
    }
}
