//! Simulation, pacing and scenario configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Plane, Restriction, DEFAULT_CAPACITY};
use crate::runtime::pacing::{DEFAULT_LANDING_PAUSE, DEFAULT_WEATHER_CHANCE, DEFAULT_WEATHER_HOLD};

/// Environment variable overriding [`SimulationConfig::capacity`].
pub const ENV_CAPACITY: &str = "AIRSPACE_CAPACITY";
/// Environment variable overriding [`SimulationConfig::max_steps`].
pub const ENV_MAX_STEPS: &str = "AIRSPACE_MAX_STEPS";
/// Environment variable overriding [`PacingConfig::mode`].
pub const ENV_PACING: &str = "AIRSPACE_PACING";

/// Pacer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// Run as fast as possible.
    #[default]
    None,
    /// Fixed pauses per step and per landing.
    Fixed,
    /// Random weather holds plus the landing pause.
    Weather,
}

impl std::str::FromStr for PacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "fixed" => Ok(Self::Fixed),
            "weather" => Ok(Self::Weather),
            other => Err(format!("unknown pacing mode `{other}`")),
        }
    }
}

/// Wall-clock pacing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pacer selection.
    pub mode: PacingMode,
    /// Pause at the top of every step (fixed mode), milliseconds.
    pub step_pause_ms: u64,
    /// Pause after each landing, milliseconds.
    pub landing_pause_ms: u64,
    /// Probability of a weather hold per step.
    pub weather_chance: f64,
    /// Length of a weather hold, milliseconds.
    pub weather_hold_ms: u64,
    /// Seed for reproducible weather.
    pub seed: Option<u64>,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            mode: PacingMode::None,
            step_pause_ms: 0,
            landing_pause_ms: duration_ms(DEFAULT_LANDING_PAUSE),
            weather_chance: DEFAULT_WEATHER_CHANCE,
            weather_hold_ms: duration_ms(DEFAULT_WEATHER_HOLD),
            seed: None,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl PacingConfig {
    /// Validate pacing values.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.weather_chance) {
            return Err(format!(
                "weather_chance must be within [0, 1], got {}",
                self.weather_chance
            ));
        }
        Ok(())
    }
}

/// Run-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Airspace units.
    pub capacity: usize,
    /// Abort after this many steps.
    pub max_steps: Option<u64>,
    /// Wall-clock pacing.
    pub pacing: PacingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_steps: None,
            pacing: PacingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".into());
        }
        if self.max_steps == Some(0) {
            return Err("max_steps must be greater than 0".into());
        }
        self.pacing.validate().map_err(|e| format!("pacing invalid: {e}"))
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by the process environment, after loading a
    /// `.env` file if one is present.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_CAPACITY) {
            cfg.capacity = raw
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_CAPACITY}: {e}"))?;
        }
        if let Some(raw) = lookup(ENV_MAX_STEPS) {
            cfg.max_steps = Some(
                raw.trim()
                    .parse()
                    .map_err(|e| format!("{ENV_MAX_STEPS}: {e}"))?,
            );
        }
        if let Some(raw) = lookup(ENV_PACING) {
            cfg.pacing.mode = raw.parse().map_err(|e| format!("{ENV_PACING}: {e}"))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// One scenario: a label, its traffic and any restricted airspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Human-readable label.
    pub label: String,
    /// Incoming planes.
    pub planes: Vec<Plane>,
    /// Closed airspace at the start of the run.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
}

impl ScenarioConfig {
    /// Create a scenario without restrictions.
    pub fn new(label: impl Into<String>, planes: Vec<Plane>) -> Self {
        Self {
            label: label.into(),
            planes,
            restrictions: Vec::new(),
        }
    }

    /// Add restrictions.
    #[must_use]
    pub fn with_restrictions(mut self, restrictions: Vec<Restriction>) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Validate the scenario against an airspace of `capacity` units.
    pub fn validate(&self, capacity: usize) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("label must not be empty".into());
        }
        for plane in &self.planes {
            plane.validate(capacity).map_err(|e| e.to_string())?;
        }
        for restriction in &self.restrictions {
            let in_range = restriction.size > 0
                && restriction
                    .start
                    .checked_add(restriction.size)
                    .is_some_and(|end| end <= capacity);
            if !in_range {
                return Err(format!(
                    "restriction at {} of {} units does not fit capacity {capacity}",
                    restriction.start, restriction.size
                ));
            }
        }
        Ok(())
    }
}

/// A file of scenarios sharing one simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// Shared configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Scenarios to run in order.
    pub scenarios: Vec<ScenarioConfig>,
}

impl ScenarioFile {
    /// Validate the configuration and every scenario; at least one is required.
    pub fn validate(&self) -> Result<(), String> {
        self.simulation.validate()?;
        if self.scenarios.is_empty() {
            return Err("at least one scenario must be defined".into());
        }
        for scenario in &self.scenarios {
            scenario
                .validate(self.simulation.capacity)
                .map_err(|e| format!("scenario `{}` invalid: {e}", scenario.label))?;
        }
        Ok(())
    }

    /// Parse a scenario file from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let file: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        file.validate()?;
        Ok(file)
    }
}
