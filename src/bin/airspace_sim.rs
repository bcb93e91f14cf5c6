//! Runs the built-in landing scenarios, or the scenarios in the JSON file
//! named by `AIRSPACE_SCENARIOS`, and prints the narrative and runway chart.

use anyhow::Context;

use airspace_scheduler::builders::SimulationBuilder;
use airspace_scheduler::config::{scenarios, ScenarioFile, SimulationConfig};
use airspace_scheduler::core::AppResult;
use airspace_scheduler::runtime::{render_airspace, render_gantt, render_plane_table, ConsoleSink};
use airspace_scheduler::util::init_tracing;

/// Environment variable naming a JSON scenario file.
const ENV_SCENARIOS: &str = "AIRSPACE_SCENARIOS";

fn load_scenarios() -> AppResult<ScenarioFile> {
    let simulation = SimulationConfig::from_env().map_err(anyhow::Error::msg)?;
    let Ok(path) = std::env::var(ENV_SCENARIOS) else {
        return Ok(ScenarioFile {
            simulation,
            scenarios: scenarios::builtin(),
        });
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    ScenarioFile::from_json_str(&raw)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading scenarios from {path}"))
}

fn main() -> AppResult<()> {
    init_tracing();

    let file = load_scenarios()?;
    for scenario in file.scenarios {
        println!("\n================== Simulation: {} ==================", scenario.label);
        println!("{}", render_plane_table(&scenario.planes));

        let label = scenario.label.clone();
        let restricted = !scenario.restrictions.is_empty();
        let simulation = SimulationBuilder::new(file.simulation.clone(), scenario)
            .sink(Box::new(ConsoleSink::stdout()))
            .build()
            .with_context(|| format!("building `{label}`"))?;
        if restricted {
            println!("{}", render_airspace(simulation.pool()));
        }
        let report = simulation.run().with_context(|| format!("running `{label}`"))?;

        println!("\n================== Gantt Chart (Runway Usage) ==================");
        print!("{}", render_gantt(&report.timeline));
        println!("Simulation complete.\n");
    }
    Ok(())
}
