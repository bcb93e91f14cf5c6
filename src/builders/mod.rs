//! Builders to construct simulations from configuration.

pub mod simulation_builder;

pub use simulation_builder::{build_pacer, build_simulations, SimulationBuilder};
