//! Console presentation: plane tables, the step narrative and the Gantt chart.

use std::fmt::Write as _;
use std::io::Write;

use crate::core::{EventKind, EventSink, Plane, ResourcePool, SimulationEvent, Timeline};

const TABLE_RULE: usize = 60;
const GANTT_RULE: usize = 50;

/// Render the pre-run plane table.
#[must_use]
pub fn render_plane_table(planes: &[Plane]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:<14}{:<11}{:<13}{:<14}Priority",
        "ID", "ArrivalTime", "Fuel", "Size", "LandingTime"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_RULE));
    for plane in planes {
        let _ = writeln!(
            out,
            "{:<6}{:<14}{:<11}{:<13}{:<14}{}",
            plane.id,
            plane.arrival_time,
            plane.fuel,
            plane.footprint,
            plane.landing_time,
            plane.priority_class()
        );
    }
    out
}

/// Render the airspace cells, `#` for occupied and `.` for free.
#[must_use]
pub fn render_airspace(pool: &ResourcePool) -> String {
    airspace_line(pool)
}

fn airspace_line(cells: impl std::fmt::Display) -> String {
    format!("Airspace: {cells}")
}

/// Render the runway usage chart.
#[must_use]
pub fn render_gantt(timeline: &Timeline) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}{:<12}{:<16}End Time",
        "Step", "Plane ID", "Start Time"
    );
    let _ = writeln!(out, "{}", "-".repeat(GANTT_RULE));
    for entry in timeline.entries() {
        let _ = writeln!(
            out,
            "{:<10}{:<12}{:<16}{}",
            entry.step, entry.plane_id, entry.start, entry.end
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(GANTT_RULE));
    out
}

/// One narrative line per event, or `None` for events the narrative skips.
#[must_use]
pub fn narrate(event: &SimulationEvent, verbose: bool) -> Option<String> {
    let time = event.time;
    let line = match &event.kind {
        EventKind::RestrictionLifted { start, size } => {
            format!("Time {time}: Restriction on units {start}..{} lifted", start + size)
        }
        EventKind::Admitted { plane_id } if verbose => {
            format!("Time {time}: Plane {plane_id} joined the landing queue")
        }
        EventKind::Admitted { .. } => return None,
        EventKind::Idle => format!("Time {time}: No planes to schedule"),
        EventKind::Selected { plane_id } => format!("\nTime {time}: Scheduling Plane {plane_id}"),
        EventKind::DelayedUnsafe { plane_id, requested, free } => format!(
            "Unsafe to allocate {requested} units to Plane {plane_id} ({free} free). Potential deadlock! Delaying."
        ),
        EventKind::DelayedNoSpace { plane_id, .. } => {
            format!("No space in airspace for Plane {plane_id}. Delayed.")
        }
        EventKind::Scheduled { plane_id, .. } => format!("Plane {plane_id} is landing."),
        EventKind::Released { plane_id, offset, footprint, airspace } if verbose => format!(
            "Time {time}: Plane {plane_id} released units {offset}..{}\n{}",
            offset + footprint,
            airspace_line(airspace)
        ),
        EventKind::Released { airspace, .. } => airspace_line(airspace),
    };
    Some(line)
}

/// Event sink that writes the step narrative to any writer.
pub struct ConsoleSink<W> {
    out: W,
    verbose: bool,
}

impl ConsoleSink<std::io::Stdout> {
    /// Narrate to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Narrate to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            verbose: false,
        }
    }

    /// Also narrate admissions and releases.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> EventSink for ConsoleSink<W> {
    fn record(&mut self, event: &SimulationEvent) {
        let Some(line) = narrate(event, self.verbose) else {
            return;
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::error!("failed to write narrative: {}", e);
        }
    }
}
