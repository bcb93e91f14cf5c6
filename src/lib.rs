//! # Airspace Scheduler
//!
//! A discrete-time simulation of landing-slot scheduling over a shared,
//! size-limited airspace.
//!
//! Planes arrive over logical time and compete for contiguous airspace units.
//! A priority scheduler decides who goes next, a coarse safety gate refuses
//! requests that exceed the free capacity, and a first-fit allocator places the
//! rest. Planes that cannot be placed are put back and retried on the next
//! tick.
//!
//! ## Key Features
//!
//! - **Priority Scheduling**: emergencies first, then lowest fuel, then the
//!   shortest landing; full ties keep insertion order
//! - **First-Fit Airspace**: lowest-offset contiguous window of the exact size
//! - **Safety Gate**: aggregate free-capacity check before every allocation
//! - **Deterministic Core**: a logical clock that wall-clock pacing cannot move
//! - **Observable Runs**: per-step outcomes, event sinks and a runway timeline
//!
//! ## Running a Scenario
//!
//! ```
//! use airspace_scheduler::core::{Plane, Simulation, StepOutcome};
//!
//! let planes = vec![
//!     Plane::new(1, 0, 5, 4, 3),
//!     Plane::new(2, 1, 4, 3, 2),
//!     Plane::new(6, 1, 1, 2, 1).with_emergency(),
//! ];
//! let report = Simulation::new("quick look", 20, planes)?.run()?;
//!
//! assert_eq!(report.timeline.plane_order(), vec![1, 6, 2]);
//! assert!(report
//!     .steps
//!     .iter()
//!     .all(|step| matches!(step.outcome, StepOutcome::Scheduled { .. })));
//! # Ok::<(), airspace_scheduler::core::SchedulerError>(())
//! ```
//!
//! Scenarios can also be loaded from JSON through [`config::ScenarioFile`] and
//! assembled with [`builders::SimulationBuilder`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and airspace accounting.
pub mod core;
/// Configuration models for simulations, pacing and scenarios.
pub mod config;
/// Builders to construct simulations from configuration.
pub mod builders;
/// Infrastructure adapters for ready-set backends.
pub mod infra;
/// Runtime adapters: wall-clock pacing and console presentation.
pub mod runtime;
/// Shared utilities.
pub mod util;
