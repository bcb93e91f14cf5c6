//! Core scheduling abstractions and airspace accounting.

pub mod error;
pub mod events;
pub mod plane;
pub mod report;
pub mod resource_pool;
pub mod scheduler;
pub mod simulation;

pub use error::{AppResult, SchedulerError};
pub use events::{CompositeSink, EventKind, EventSink, InMemoryEventSink, SimulationEvent};
pub use plane::{Plane, PlaneId, PriorityClass, LOW_FUEL_THRESHOLD};
pub use report::{SimulationReport, StepOutcome, StepRecord, Timeline, TimelineEntry};
pub use resource_pool::{ResourcePool, DEFAULT_CAPACITY};
pub use scheduler::{ReadyPlane, ReadyQueue, Scheduler};
pub use simulation::{NoPacing, Pacer, Restriction, Simulation};
