//! Terminal driver for the savanna world simulator.

mod runner;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use savanna_core::RunConfig;
use savanna_world::Scenario;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(author, version, about = "Predator/prey world simulator")]
struct Cli {
    /// Path to a scenario JSON file (built-in savanna when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Print the world every N ticks (0 renders only the first tick)
    #[arg(long)]
    render_every: Option<u64>,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Hide per-tick event lines
    #[arg(long)]
    quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print the scenario as JSON and exit
    #[arg(long)]
    dump_scenario: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.log_json)?;

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::default(),
    };
    if let Some(seed) = cli.seed {
        scenario.world.seed = Some(seed);
    }

    if cli.dump_scenario {
        println!("{}", scenario.to_json()?);
        return Ok(());
    }

    let defaults = RunConfig::default();
    let config = RunConfig {
        num_ticks: cli.ticks.unwrap_or(defaults.num_ticks),
        render_every: cli.render_every.unwrap_or(defaults.render_every),
    };

    info!(scenario = %scenario.name, seed = ?scenario.world.seed, "Starting savanna");

    let world = scenario.build()?;
    let stdout = io::stdout();
    let mut runner =
        runner::Runner::new(world, config, BufWriter::new(stdout.lock())).quiet(cli.quiet);

    runner.introduce()?;
    let census = runner.run()?;
    info!(
        survivors = census.population(),
        plants = runner.world().plants().len(),
        "Done"
    );

    runner.into_output().flush()?;
    Ok(())
}
