//! Tests for builder modules

use airspace_scheduler::builders::{build_pacer, SimulationBuilder};
use airspace_scheduler::config::{scenarios, PacingConfig, PacingMode, SimulationConfig};
use airspace_scheduler::core::{Plane, SchedulerError};

#[test]
fn test_simulation_builder_accessors() {
    let builder = SimulationBuilder::new(SimulationConfig::default(), scenarios::emergency_case());
    assert_eq!(builder.label(), "Emergency Case Scheduling");
    assert_eq!(builder.config().capacity, 20);
    assert_eq!(builder.scenario().planes.len(), 5);
}

#[test]
fn test_builder_applies_max_steps() {
    let config = SimulationConfig { max_steps: Some(2), ..SimulationConfig::default() };
    let result = SimulationBuilder::new(config, scenarios::normal_traffic())
        .build()
        .unwrap()
        .run();
    assert_eq!(result.unwrap_err(), SchedulerError::StepLimitExceeded { limit: 2 });
}

#[test]
fn test_builder_rejects_duplicate_ids() {
    let mut scenario = scenarios::normal_traffic();
    scenario.planes.push(Plane::new(1, 9, 1, 1, 1));
    let result = SimulationBuilder::new(SimulationConfig::default(), scenario).build();
    assert!(matches!(result, Err(SchedulerError::DuplicatePlane(1))));
}

#[test]
fn test_build_pacer_for_every_mode() {
    for mode in [PacingMode::None, PacingMode::Fixed, PacingMode::Weather] {
        let cfg = PacingConfig {
            mode,
            landing_pause_ms: 0,
            weather_hold_ms: 0,
            seed: Some(1),
            ..PacingConfig::default()
        };
        let mut pacer = build_pacer(&cfg);
        pacer.before_step(0);
        pacer.after_landing(&Plane::new(1, 0, 1, 1, 1));
    }
}
