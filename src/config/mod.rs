//! Configuration models for simulations, pacing and scenarios.

pub mod scenarios;
pub mod simulation;

pub use simulation::{PacingConfig, PacingMode, ScenarioConfig, ScenarioFile, SimulationConfig};
