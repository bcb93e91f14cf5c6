//! Discrete-time landing loop.
//!
//! Each step admits arrivals, picks the highest-priority ready plane, runs it
//! through the safety gate and the first-fit allocator, and either lands it
//! or puts it back. A landing moves the clock past the whole landing time and
//! frees the window before the next step starts, so at most one plane holds
//! airspace at any moment.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::events::{EventKind, EventSink, SimulationEvent};
use crate::core::plane::Plane;
use crate::core::report::{SimulationReport, StepOutcome, StepRecord, Timeline};
use crate::core::resource_pool::ResourcePool;
use crate::core::scheduler::{ReadyPlane, ReadyQueue, Scheduler};
use crate::core::SchedulerError;
use crate::infra::queue::InMemoryReadyQueue;
use crate::util::clock::{LogicalClock, Tick};

/// Airspace closed from the start of the run until `lifted_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// First closed cell.
    pub start: usize,
    /// Number of closed cells.
    pub size: usize,
    /// First tick at which the cells are free again.
    pub lifted_at: Tick,
}

/// Wall-clock pacing hooks.
///
/// Pacers see the logical time but cannot change it; swapping one pacer for
/// another must leave every scheduling decision untouched.
pub trait Pacer: Send {
    /// Called at the top of every step.
    fn before_step(&mut self, time: Tick);
    /// Called after a plane is committed, before the clock jumps.
    fn after_landing(&mut self, plane: &Plane);
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn before_step(&mut self, _time: Tick) {}

    fn after_landing(&mut self, _plane: &Plane) {}
}

/// A single simulation run over one scenario.
pub struct Simulation<Q = InMemoryReadyQueue> {
    label: String,
    scheduler: Scheduler<Q>,
    pool: ResourcePool,
    clock: LogicalClock,
    /// Planes that have not arrived yet, ascending by id.
    unreleased: Vec<Plane>,
    restrictions: Vec<Restriction>,
    steps: Vec<StepRecord>,
    timeline: Timeline,
    max_steps: Option<u64>,
    pacer: Box<dyn Pacer>,
    sink: Option<Box<dyn EventSink>>,
}

impl Simulation<InMemoryReadyQueue> {
    /// Build a run over `planes` with an empty pool of `capacity` cells.
    pub fn new(
        label: impl Into<String>,
        capacity: usize,
        planes: Vec<Plane>,
    ) -> Result<Self, SchedulerError> {
        Self::with_scheduler(label, capacity, planes, Scheduler::new())
    }
}

impl<Q: ReadyQueue> Simulation<Q> {
    /// Build a run that uses a caller-supplied scheduler backend.
    ///
    /// Fails if a plane has a zero footprint, cannot fit in `capacity`, or
    /// shares its id with another plane.
    pub fn with_scheduler(
        label: impl Into<String>,
        capacity: usize,
        mut planes: Vec<Plane>,
        scheduler: Scheduler<Q>,
    ) -> Result<Self, SchedulerError> {
        let mut seen = HashSet::with_capacity(planes.len());
        for plane in &planes {
            plane.validate(capacity)?;
            if !seen.insert(plane.id) {
                return Err(SchedulerError::DuplicatePlane(plane.id));
            }
        }
        planes.sort_by_key(|plane| plane.id);

        Ok(Self {
            label: label.into(),
            scheduler,
            pool: ResourcePool::new(capacity),
            clock: LogicalClock::new(),
            unreleased: planes,
            restrictions: Vec::new(),
            steps: Vec::new(),
            timeline: Timeline::new(),
            max_steps: None,
            pacer: Box::new(NoPacing),
            sink: None,
        })
    }

    /// Close airspace ranges until their `lifted_at` tick.
    pub fn with_restrictions(mut self, restrictions: Vec<Restriction>) -> Result<Self, SchedulerError> {
        for restriction in &restrictions {
            self.pool.reserve(restriction.start, restriction.size)?;
        }
        self.restrictions.extend(restrictions);
        Ok(self)
    }

    /// Abort with [`SchedulerError::StepLimitExceeded`] after `limit` steps.
    #[must_use]
    pub fn with_max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    /// Replace the pacer.
    #[must_use]
    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Attach an event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Scenario label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current logical time.
    pub const fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Airspace state.
    pub const fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Planes that have not arrived yet, ascending by id.
    pub fn unreleased(&self) -> &[Plane] {
        &self.unreleased
    }

    /// Number of ready planes.
    pub fn ready_len(&self) -> usize {
        self.scheduler.len()
    }

    /// Landings committed so far.
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// True once every plane has landed.
    pub fn is_finished(&self) -> bool {
        self.unreleased.is_empty() && self.scheduler.is_empty()
    }

    /// Run one step. Returns `None` once the run is finished.
    pub fn step(&mut self) -> Result<Option<StepRecord>, SchedulerError> {
        if self.is_finished() {
            return Ok(None);
        }
        if let Some(limit) = self.max_steps {
            if self.steps.len() as u64 >= limit {
                tracing::error!("{}: step limit {} exceeded at time {}", self.label, limit, self.now());
                return Err(SchedulerError::StepLimitExceeded { limit });
            }
        }

        let time = self.clock.now();
        self.pacer.before_step(time);
        self.lift_restrictions(time)?;
        self.admit_arrivals(time);
        let outcome = self.dispatch(time)?;

        let record = StepRecord { time, outcome };
        self.steps.push(record.clone());
        Ok(Some(record))
    }

    /// Step until every plane has landed and return the report.
    pub fn run(mut self) -> Result<SimulationReport, SchedulerError> {
        tracing::info!(
            "{}: starting with {} planes on {} units",
            self.label,
            self.unreleased.len(),
            self.pool.capacity()
        );
        while self.step()?.is_some() {}
        tracing::info!(
            "{}: complete at time {} after {} landings",
            self.label,
            self.now(),
            self.timeline.len()
        );
        Ok(self.into_report())
    }

    /// Snapshot the run so far as a report.
    pub fn into_report(self) -> SimulationReport {
        SimulationReport {
            label: self.label,
            capacity: self.pool.capacity(),
            steps: self.steps,
            timeline: self.timeline,
            finished_at: self.clock.now(),
            pending_restrictions: self.restrictions,
        }
    }

    /// Free every restriction due at `time`.
    ///
    /// Ranges were checked by [`ResourcePool::reserve`] when added, so the
    /// deallocation only fails if the pool no longer matches them.
    fn lift_restrictions(&mut self, time: Tick) -> Result<(), SchedulerError> {
        if self.restrictions.is_empty() {
            return Ok(());
        }
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.restrictions)
            .into_iter()
            .partition(|restriction| restriction.lifted_at <= time);
        self.restrictions = pending;

        for restriction in due {
            self.pool.deallocate(restriction.start, restriction.size)?;
            tracing::info!(
                "time {}: restriction on {} units at offset {} lifted",
                time,
                restriction.size,
                restriction.start
            );
            self.emit(
                time,
                EventKind::RestrictionLifted {
                    start: restriction.start,
                    size: restriction.size,
                },
            );
        }
        Ok(())
    }

    fn admit_arrivals(&mut self, time: Tick) {
        let (due, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.unreleased)
            .into_iter()
            .partition(|plane| plane.arrival_time <= time);
        self.unreleased = later;

        for plane in due {
            tracing::debug!("time {}: plane {} admitted", time, plane.id);
            self.emit(time, EventKind::Admitted { plane_id: plane.id });
            self.scheduler.add_plane(plane);
        }
    }

    fn dispatch(&mut self, time: Tick) -> Result<StepOutcome, SchedulerError> {
        let Some(ready) = self.scheduler.next_ready() else {
            tracing::debug!("time {}: no planes to schedule", time);
            self.emit(time, EventKind::Idle);
            self.clock.tick();
            return Ok(StepOutcome::Idle);
        };
        let plane_id = ready.plane.id;
        tracing::debug!("time {}: selected plane {}", time, plane_id);
        self.emit(time, EventKind::Selected { plane_id });

        match self.pool.ensure_safe(ready.plane.footprint) {
            Ok(()) => {}
            Err(SchedulerError::Unsafe { requested, free }) => {
                tracing::warn!(
                    "time {}: unsafe to allocate {} units to plane {} ({} free), delaying",
                    time,
                    requested,
                    plane_id,
                    free
                );
                self.emit(time, EventKind::DelayedUnsafe { plane_id, requested, free });
                self.requeue(ready);
                return Ok(StepOutcome::DelayedUnsafe { plane_id, requested, free });
            }
            Err(err) => return Err(err),
        }

        let offset = match self.pool.allocate(ready.plane.footprint) {
            Ok(offset) => offset,
            Err(SchedulerError::NotFound { size }) => {
                tracing::warn!(
                    "time {}: no {}-unit window for plane {}, delaying",
                    time,
                    size,
                    plane_id
                );
                self.emit(time, EventKind::DelayedNoSpace { plane_id, requested: size });
                self.requeue(ready);
                return Ok(StepOutcome::DelayedNoSpace { plane_id, requested: size });
            }
            Err(err) => return Err(err),
        };

        self.commit(time, &ready.plane, offset)?;
        Ok(StepOutcome::Scheduled {
            plane_id,
            offset,
            landing_time: ready.plane.landing_time,
        })
    }

    /// Land `plane` in the window at `offset`, advance the clock and free the
    /// window. The window came from [`ResourcePool::allocate`], so releasing it
    /// cannot go out of range.
    fn commit(&mut self, time: Tick, plane: &Plane, offset: usize) -> Result<(), SchedulerError> {
        tracing::info!(
            "time {}: plane {} landing in units {}..{}",
            time,
            plane.id,
            offset,
            offset + plane.footprint
        );
        self.emit(
            time,
            EventKind::Scheduled {
                plane_id: plane.id,
                offset,
                footprint: plane.footprint,
                landing_time: plane.landing_time,
            },
        );
        self.timeline.record(plane.id, plane.landing_time, time);
        self.pacer.after_landing(plane);

        self.clock.advance(plane.landing_time);
        self.pool.deallocate(offset, plane.footprint)?;
        let released_at = self.clock.now();
        tracing::debug!("time {}: airspace {}", released_at, self.pool);
        self.emit(
            released_at,
            EventKind::Released {
                plane_id: plane.id,
                offset,
                footprint: plane.footprint,
                airspace: self.pool.to_string(),
            },
        );
        Ok(())
    }

    fn requeue(&mut self, ready: ReadyPlane) {
        self.scheduler.requeue(ready);
        self.clock.tick();
    }

    fn emit(&mut self, time: Tick, kind: EventKind) {
        if let Some(sink) = self.sink.as_mut() {
            sink.record(&SimulationEvent { time, kind });
        }
    }
}
