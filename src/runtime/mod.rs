//! Runtime adapters: wall-clock pacing and console presentation.

pub mod console;
pub mod pacing;

pub use console::{render_airspace, render_gantt, render_plane_table, ConsoleSink};
pub use pacing::{FixedPacer, WeatherPacer};
