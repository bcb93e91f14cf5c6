//! Tests for configuration validation

use airspace_scheduler::config::{PacingConfig, PacingMode, ScenarioConfig, ScenarioFile, SimulationConfig};
use airspace_scheduler::core::Plane;

#[test]
fn test_simulation_config_validation() {
    assert!(SimulationConfig::default().validate().is_ok());
}

#[test]
fn test_simulation_config_invalid_capacity() {
    let invalid = SimulationConfig { capacity: 0, ..SimulationConfig::default() };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_simulation_config_invalid_max_steps() {
    let invalid = SimulationConfig { max_steps: Some(0), ..SimulationConfig::default() };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_pacing_config_invalid_chance() {
    let invalid = SimulationConfig {
        pacing: PacingConfig { weather_chance: 1.5, ..PacingConfig::default() },
        ..SimulationConfig::default()
    };
    let err = invalid.validate().unwrap_err();
    assert!(err.starts_with("pacing invalid"));
}

#[test]
fn test_simulation_config_from_json_fills_defaults() {
    let config = SimulationConfig::from_json_str(r#"{ "capacity": 30, "pacing": { "mode": "weather", "seed": 9 } }"#)
        .unwrap();
    assert_eq!(config.capacity, 30);
    assert_eq!(config.max_steps, None);
    assert_eq!(config.pacing.mode, PacingMode::Weather);
    assert_eq!(config.pacing.seed, Some(9));
    assert_eq!(config.pacing.landing_pause_ms, 200);
}

#[test]
fn test_scenario_file_from_json() {
    let json = r#"{
        "simulation": { "capacity": 20 },
        "scenarios": [
            {
                "label": "json traffic",
                "planes": [
                    { "id": 1, "arrival_time": 0, "fuel": 5, "footprint": 4, "landing_time": 3 },
                    { "id": 6, "arrival_time": 1, "fuel": 1, "footprint": 2, "landing_time": 1, "emergency": true }
                ],
                "restrictions": [ { "start": 10, "size": 5, "lifted_at": 2 } ]
            }
        ]
    }"#;

    let file = ScenarioFile::from_json_str(json).unwrap();
    assert_eq!(file.scenarios.len(), 1);
    let scenario = &file.scenarios[0];
    assert_eq!(scenario.planes[1], Plane::new(6, 1, 1, 2, 1).with_emergency());
    assert_eq!(scenario.restrictions[0].lifted_at, 2);
}

#[test]
fn test_scenario_file_empty() {
    let file = ScenarioFile { simulation: SimulationConfig::default(), scenarios: Vec::new() };
    assert!(file.validate().is_err());
}

#[test]
fn test_scenario_file_rejects_oversized_plane() {
    let file = ScenarioFile {
        simulation: SimulationConfig { capacity: 4, ..SimulationConfig::default() },
        scenarios: vec![ScenarioConfig::new("wide", vec![Plane::new(1, 0, 1, 5, 1)])],
    };
    let err = file.validate().unwrap_err();
    assert!(err.contains("scenario `wide` invalid"));
}

#[test]
fn test_scenario_file_parse_error() {
    let err = ScenarioFile::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_from_env_without_overrides() {
    let overridden = ["AIRSPACE_CAPACITY", "AIRSPACE_MAX_STEPS", "AIRSPACE_PACING"]
        .iter()
        .any(|key| std::env::var(key).is_ok());
    let config = SimulationConfig::from_env().unwrap();
    if !overridden {
        assert_eq!(config, SimulationConfig::default());
    }
}
