//! Tests for pacers

use std::time::{Duration, Instant};

use airspace_scheduler::core::{NoPacing, Pacer, Plane};
use airspace_scheduler::runtime::{FixedPacer, WeatherPacer};

#[test]
fn test_no_pacing_is_instant() {
    let start = Instant::now();
    let mut pacer = NoPacing;
    for time in 0..1000 {
        pacer.before_step(time);
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_fixed_pacer_sleeps_after_landing() {
    let mut pacer = FixedPacer::new(Duration::ZERO, Duration::from_millis(20));
    let start = Instant::now();
    pacer.after_landing(&Plane::new(1, 0, 1, 1, 1));
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[test]
fn test_weather_pacer_counts_holds() {
    let mut pacer = WeatherPacer::new(1.0, Duration::ZERO, Duration::ZERO, Some(11));
    pacer.before_step(0);
    pacer.before_step(1);
    assert_eq!(pacer.holds(), 2);
}
