//! Built-in traffic scenarios.

use crate::config::simulation::ScenarioConfig;
use crate::core::Plane;

/// Ordinary traffic, no emergencies.
#[must_use]
pub fn normal_traffic() -> ScenarioConfig {
    ScenarioConfig::new(
        "Normal Priority Scheduling",
        vec![
            Plane::new(1, 0, 5, 4, 3),
            Plane::new(2, 1, 4, 3, 2),
            Plane::new(3, 2, 6, 5, 4),
            Plane::new(4, 3, 1, 2, 1),
            Plane::new(5, 4, 2, 3, 3),
        ],
    )
}

/// Plane 6 declares an emergency on arrival.
#[must_use]
pub fn emergency_case() -> ScenarioConfig {
    ScenarioConfig::new(
        "Emergency Case Scheduling",
        vec![
            Plane::new(1, 0, 5, 4, 3),
            Plane::new(2, 1, 4, 3, 2),
            Plane::new(6, 1, 1, 2, 1).with_emergency(),
            Plane::new(3, 2, 6, 5, 4),
            Plane::new(5, 4, 1, 3, 3),
        ],
    )
}

/// Two wide planes and a third that would not fit beside both.
#[must_use]
pub fn deadlock_prevention() -> ScenarioConfig {
    ScenarioConfig::new(
        "Deadlock Prevention Scenario",
        vec![
            Plane::new(7, 0, 3, 8, 3),
            Plane::new(8, 1, 2, 8, 2),
            Plane::new(9, 2, 1, 5, 2),
        ],
    )
}

/// All built-in scenarios in their canonical order.
#[must_use]
pub fn builtin() -> Vec<ScenarioConfig> {
    vec![normal_traffic(), emergency_case(), deadlock_prevention()]
}
