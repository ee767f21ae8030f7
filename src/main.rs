//! Entry point: load samples, build correlations, run the search, write
//! the order file for the device-side remapper.

use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledlayout::cli::{Args, TopologyArg};
use ledlayout::config::AppConfig;
use ledlayout::core::anneal::AnnealParams;
use ledlayout::core::correlation::CorrelationMatrix;
use ledlayout::core::energy::EnergyFunction;
use ledlayout::core::multistart;
use ledlayout::core::report;
use ledlayout::core::samples::SampleMatrix;
use ledlayout::core::topology::Topology;
use ledlayout::error::{ConfigError, RunError};

fn build_topology(args: &Args, channels: usize) -> Result<Topology, ConfigError> {
    match args.topology {
        TopologyArg::Chain => Ok(Topology::chain(channels)),
        TopologyArg::Grid => {
            let height = args
                .height
                .ok_or(ConfigError::MissingGridDimension { name: "height" })?;
            let width = args
                .width
                .ok_or(ConfigError::MissingGridDimension { name: "width" })?;
            let positions = height * width * args.planes;
            if positions != channels {
                return Err(ConfigError::GridMismatch {
                    height,
                    width,
                    planes: args.planes,
                    positions,
                    channels,
                });
            }
            Ok(Topology::grid2d(height, width, args.planes))
        }
    }
}

fn main() -> Result<(), RunError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::load_or_default(&args.config);

    info!("loading samples from {}", args.samples_path);
    let samples = SampleMatrix::load(Path::new(&args.samples_path), args.delimiter)?;
    info!(
        rows = samples.rows(),
        channels = samples.channels(),
        "samples loaded"
    );

    info!("computing correlations");
    let correlations = CorrelationMatrix::from_samples(&samples)?;
    let sorted_pairs = correlations.sorted_pairs();
    report::write_sorted_correlations(Path::new(&args.correlations_out), &sorted_pairs)?;
    info!("sorted correlations written to {}", args.correlations_out);

    let topology = build_topology(&args, samples.channels())?;
    let energy = EnergyFunction::new(&correlations, &topology);
    let params = AnnealParams {
        steps: args.steps.unwrap_or(cfg.anneal.steps),
        t_start: cfg.anneal.t_start,
        t_end: cfg.anneal.t_end,
        log_every: cfg.anneal.log_every,
    };
    let seed = args.seed.unwrap_or(cfg.search.seed);
    let restarts = args.restarts.unwrap_or(cfg.search.restarts);

    info!(
        steps = params.steps,
        seed,
        restarts,
        edges = topology.edges().len(),
        "optimizing channel order"
    );
    let outcome = multistart::run(&energy, &params, seed, restarts)?;
    info!(energy = outcome.energy, "search finished");

    report::write_order(Path::new(&args.order_out), &outcome.order)?;
    info!("channel order written to {}", args.order_out);
    Ok(())
}
