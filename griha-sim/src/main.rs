//! griha-sim - run the cleaning robot through a house
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (or ./griha-sim.toml when present)
//! griha-sim --house houses/small_room.yaml
//!
//! # Custom config, budgets and output directory
//! griha-sim --house houses/l_shaped.yaml --config griha-sim.toml \
//!     --max-steps 500 --max-battery 30 --output-dir output/l_shaped
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use griha_sim::{House, Result, SimConfig, Simulation, report};

/// Default config file picked up from the working directory
const DEFAULT_CONFIG: &str = "griha-sim.toml";

#[derive(Parser, Debug)]
#[command(
    name = "griha-sim",
    version,
    about = "Simulate a cleaning robot exploring an unknown house"
)]
struct Args {
    /// House layout file (YAML)
    #[arg(long)]
    house: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the step budget
    #[arg(long)]
    max_steps: Option<u32>,

    /// Override the battery capacity
    #[arg(long)]
    max_battery: Option<f32>,

    /// Write all output files into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<(SimConfig, Option<PathBuf>)> {
    match path {
        Some(path) => Ok((SimConfig::load(path)?, Some(path.to_path_buf()))),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok((
            SimConfig::load(Path::new(DEFAULT_CONFIG))?,
            Some(PathBuf::from(DEFAULT_CONFIG)),
        )),
        None => Ok((SimConfig::default(), None)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (mut config, config_path) = load_config(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("griha-sim v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => log::info!("Loaded configuration from {}", path.display()),
        None => log::info!("Using default configuration"),
    }

    // Command line beats config file
    if let Some(max_steps) = args.max_steps {
        config.simulation.max_steps = Some(max_steps);
    }
    if let Some(max_battery) = args.max_battery {
        config.simulation.max_battery = Some(max_battery);
    }
    if let Some(dir) = &args.output_dir {
        config.output = config.output.in_dir(dir);
    }

    log::info!("Loading house from {}", args.house.display());
    let house = House::load(&args.house)?;

    let report = Simulation::new(house, &config)?.run()?;
    report::write_all(&report, &config.output)?;

    log::info!(
        "Done: {} steps, {} dirt left. {}",
        report.steps,
        report.dirt_remaining,
        report.exit_text()
    );
    Ok(())
}
