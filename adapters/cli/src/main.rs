#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plans a mission and writes its trajectory.

mod output;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use skydrift_planners::{planner_by_name, trajectory_score, PLANNER_NAMES};
use skydrift_world::Scenario;

/// Plans balloon-fleet trajectories for a scenario file.
#[derive(Debug, Parser)]
#[command(name = "skydrift", version, about)]
struct Args {
    /// Path to the textual scenario description.
    scenario: PathBuf,

    /// Path the trajectory file is written to.
    #[arg(short, long)]
    output: PathBuf,

    /// Planner to run; one of: random, greedy, genetic.
    #[arg(short, long, default_value = "greedy")]
    planner: String,

    /// Seed for planners that use randomness.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading scenario file {}", args.scenario.display()))?;
    let scenario = Scenario::parse(&text)
        .with_context(|| format!("parsing scenario file {}", args.scenario.display()))?;

    let mut planner = planner_by_name(&args.planner, args.seed)
        .with_context(|| format!("known planners: {}", PLANNER_NAMES.join(", ")))?;
    let trajectory = planner
        .compute(&scenario)
        .with_context(|| format!("running the '{}' planner", args.planner))?;

    let score = trajectory_score(&scenario, &trajectory).context("scoring the trajectory")?;

    fs::write(&args.output, output::render_trajectory(&trajectory))
        .with_context(|| format!("writing trajectory file {}", args.output.display()))?;

    println!(
        "planner '{}' covered {score} target-turns over {} turns; trajectory written to {}",
        args.planner,
        scenario.turn_count(),
        args.output.display()
    );
    Ok(())
}
