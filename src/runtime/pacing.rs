//! Wall-clock pacers for watching a run unfold.
//!
//! None of these touch the logical clock. They only slow the loop down so a
//! human can follow the narrative.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Pacer, Plane};
use crate::util::clock::Tick;

/// Pause after each landing in the reference program.
pub const DEFAULT_LANDING_PAUSE: Duration = Duration::from_millis(200);
/// Chance of a weather hold at the top of a step.
pub const DEFAULT_WEATHER_CHANCE: f64 = 0.2;
/// Length of a weather hold.
pub const DEFAULT_WEATHER_HOLD: Duration = Duration::from_secs(6);

/// Sleeps a fixed amount per step and per landing.
#[derive(Debug, Clone, Copy)]
pub struct FixedPacer {
    step_pause: Duration,
    landing_pause: Duration,
}

impl FixedPacer {
    /// Create a pacer with explicit pauses.
    #[must_use]
    pub const fn new(step_pause: Duration, landing_pause: Duration) -> Self {
        Self {
            step_pause,
            landing_pause,
        }
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        Self::new(Duration::ZERO, DEFAULT_LANDING_PAUSE)
    }
}

impl Pacer for FixedPacer {
    fn before_step(&mut self, _time: Tick) {
        pause(self.step_pause);
    }

    fn after_landing(&mut self, _plane: &Plane) {
        pause(self.landing_pause);
    }
}

/// Randomly holds all traffic for bad weather, then paces landings.
///
/// The hold is cosmetic: the step still runs at the same logical time.
#[derive(Debug, Clone)]
pub struct WeatherPacer {
    rng: StdRng,
    chance: f64,
    hold: Duration,
    landing_pause: Duration,
    holds: u64,
}

impl WeatherPacer {
    /// Create a weather pacer. `chance` is clamped to `[0, 1]`; a `seed`
    /// makes the hold pattern reproducible.
    #[must_use]
    pub fn new(chance: f64, hold: Duration, landing_pause: Duration, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        Self {
            rng,
            chance,
            hold,
            landing_pause,
            holds: 0,
        }
    }

    /// Number of weather holds triggered so far.
    #[must_use]
    pub const fn holds(&self) -> u64 {
        self.holds
    }
}

impl Default for WeatherPacer {
    fn default() -> Self {
        Self::new(DEFAULT_WEATHER_CHANCE, DEFAULT_WEATHER_HOLD, DEFAULT_LANDING_PAUSE, None)
    }
}

impl Pacer for WeatherPacer {
    fn before_step(&mut self, time: Tick) {
        if self.rng.random_bool(self.chance) {
            self.holds += 1;
            tracing::warn!("time {}: weather delay, all flights postponed", time);
            pause(self.hold);
        }
    }

    fn after_landing(&mut self, _plane: &Plane) {
        pause(self.landing_pause);
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
