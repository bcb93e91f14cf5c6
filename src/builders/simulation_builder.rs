//! Builders to construct simulations from configuration.

use std::time::Duration;

use crate::config::{PacingConfig, PacingMode, ScenarioConfig, ScenarioFile, SimulationConfig};
use crate::core::{EventSink, NoPacing, Pacer, SchedulerError, Simulation};
use crate::runtime::pacing::{FixedPacer, WeatherPacer};

/// Build the pacer described by `cfg`.
#[must_use]
pub fn build_pacer(cfg: &PacingConfig) -> Box<dyn Pacer> {
    match cfg.mode {
        PacingMode::None => Box::new(NoPacing),
        PacingMode::Fixed => Box::new(FixedPacer::new(
            Duration::from_millis(cfg.step_pause_ms),
            Duration::from_millis(cfg.landing_pause_ms),
        )),
        PacingMode::Weather => Box::new(WeatherPacer::new(
            cfg.weather_chance,
            Duration::from_millis(cfg.weather_hold_ms),
            Duration::from_millis(cfg.landing_pause_ms),
            cfg.seed,
        )),
    }
}

/// Assembles one [`Simulation`] from configuration.
pub struct SimulationBuilder {
    config: SimulationConfig,
    scenario: ScenarioConfig,
    pacer: Option<Box<dyn Pacer>>,
    sink: Option<Box<dyn EventSink>>,
}

impl SimulationBuilder {
    /// Start a builder for `scenario` under `config`.
    #[must_use]
    pub fn new(config: SimulationConfig, scenario: ScenarioConfig) -> Self {
        Self {
            config,
            scenario,
            pacer: None,
            sink: None,
        }
    }

    /// Scenario label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.scenario.label
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Scenario in use.
    #[must_use]
    pub const fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }

    /// Use `pacer` instead of the one described by the pacing config.
    #[must_use]
    pub fn pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Attach an event sink.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate everything and produce a simulation ready to run.
    pub fn build(self) -> Result<Simulation, SchedulerError> {
        self.config.validate().map_err(SchedulerError::InvalidConfig)?;

        let pacer = self.pacer.unwrap_or_else(|| build_pacer(&self.config.pacing));
        let mut simulation = Simulation::new(
            self.scenario.label,
            self.config.capacity,
            self.scenario.planes,
        )?
        .with_restrictions(self.scenario.restrictions)?
        .with_max_steps(self.config.max_steps)
        .with_pacer(pacer);
        if let Some(sink) = self.sink {
            simulation = simulation.with_sink(sink);
        }
        Ok(simulation)
    }
}

/// Build one simulation per scenario in `file`, in order.
pub fn build_simulations(file: &ScenarioFile) -> Result<Vec<Simulation>, SchedulerError> {
    file.validate().map_err(SchedulerError::InvalidConfig)?;
    file.scenarios
        .iter()
        .map(|scenario| SimulationBuilder::new(file.simulation.clone(), scenario.clone()).build())
        .collect()
}
