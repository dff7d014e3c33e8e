//! guard-sim: run one guard against a scripted target and report what it did.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use guard_sim::{Scenario, SimWorld};

#[derive(Parser)]
#[command(name = "guard-sim")]
#[command(about = "Headless guard AI simulation", version)]
struct Cli {
    /// Scenario file (YAML). Uses the built-in courtyard scenario when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Seed for per-guard randomness
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Per-tick behavior tree diagnostics
    #[arg(long)]
    debug: bool,

    /// Print every frame
    #[arg(long)]
    frames: bool,

    /// Write the trace log as JSON
    #[arg(long)]
    trace_out: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    let mut world =
        SimWorld::new(&scenario, cli.seed, cli.dt).context("failed to set up guard")?;
    world.set_debug(cli.debug);

    tracing::info!(
        ticks = cli.ticks,
        dt = cli.dt,
        seed = cli.seed,
        waypoints = scenario.route.len(),
        "Starting simulation"
    );

    for _ in 0..cli.ticks {
        let step = world.step();
        if cli.frames {
            println!("{}", serde_json::to_string(&step)?);
        }
    }

    if let Some(path) = &cli.trace_out {
        let json = serde_json::to_string_pretty(&world.trace())?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write trace to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Trace written");
    }

    let summary = world.summary();
    println!("Simulated {} frames", summary.ticks);
    println!("  patrol:           {}", summary.patrol_ticks);
    println!("  chase:            {}", summary.chase_ticks);
    println!("  search:           {}", summary.search_ticks);
    println!("  return to patrol: {}", summary.return_ticks);
    println!("Transitions: {}", summary.transitions);
    println!("Spotted:     {}", summary.spotted);
    println!("Caught:      {}", summary.caught);

    Ok(())
}
