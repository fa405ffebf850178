use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use workflow::config::PlotConfig;
use workflow::runner::{Mode, Runner, DEFAULT_GRID_DEGREES};

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render satellite-link telemetry captures as KML"
)]
struct Args {
    /// Output mode
    #[arg(value_enum)]
    mode: Mode,
    /// Heatmap cell size in degrees
    grid_degrees: Option<f64>,
    /// Load render options from a YAML file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable verbose diagnostics
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => PlotConfig::load(path)?,
        None => PlotConfig::default(),
    };
    let grid_degrees = args
        .grid_degrees
        .or(config.grid_degrees)
        .unwrap_or(DEFAULT_GRID_DEGREES);

    let runner = Runner::new(args.mode, grid_degrees, config.document_name);
    let stdin = io::stdin();
    let stdout = io::stdout();
    runner
        .execute(stdin.lock(), stdout.lock())
        .context("plotting telemetry")?;

    Ok(())
}
