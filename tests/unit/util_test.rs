//! Tests for utility functions

use airspace_scheduler::util::{init_tracing, LogicalClock, Tick};

#[test]
fn test_logical_clock() {
    let mut clock = LogicalClock::new();
    clock.advance(3);
    clock.tick();
    let now: Tick = clock.now();
    assert_eq!(now, 4);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
