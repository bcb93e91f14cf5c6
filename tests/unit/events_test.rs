//! Tests for event sinks

use airspace_scheduler::core::{EventKind, EventSink, InMemoryEventSink, SimulationEvent};

fn event(time: u64, kind: EventKind) -> SimulationEvent {
    SimulationEvent { time, kind }
}

#[test]
fn test_in_memory_event_sink() {
    let mut sink = InMemoryEventSink::new(10);

    sink.record(&event(3, EventKind::Scheduled { plane_id: 4, offset: 0, footprint: 2, landing_time: 1 }));
    assert_eq!(sink.len(), 1);

    let events = sink.events();
    assert_eq!(events[0].time, 3);
    assert_eq!(events[0].plane_id(), Some(4));
}

#[test]
fn test_event_sink_overflow() {
    let mut sink = InMemoryEventSink::new(2);

    sink.record(&event(0, EventKind::Admitted { plane_id: 1 }));
    sink.record(&event(1, EventKind::Admitted { plane_id: 2 }));
    sink.record(&event(2, EventKind::Admitted { plane_id: 3 }));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].plane_id(), Some(2)); // First one popped
    assert_eq!(events[1].plane_id(), Some(3));
}

#[test]
fn test_event_round_trips_through_json() {
    let event_in = event(7, EventKind::DelayedUnsafe { plane_id: 9, requested: 5, free: 4 });
    let json = serde_json::to_string(&event_in).unwrap();
    assert!(json.contains("\"kind\":\"delayed_unsafe\""));
    let parsed: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event_in);
}
