use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Sample table: rows = captured frames, columns = NN output channels
    #[arg(value_name = "SAMPLES_PATH", default_value = "raw_nn_outputs.csv")]
    pub samples_path: String,

    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Field delimiter in the sample table
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Output path for the sorted correlation distribution
    #[arg(long, default_value = "sorted_correlations.csv")]
    pub correlations_out: String,

    /// Output path for the optimized channel order
    #[arg(long, default_value = "nn_outputs_order.csv")]
    pub order_out: String,

    /// Layout topology to optimize for
    #[arg(long, value_enum, default_value_t = TopologyArg::Chain)]
    pub topology: TopologyArg,

    /// Grid height in cells (required with --topology grid)
    #[arg(long)]
    pub height: Option<usize>,

    /// Grid width in cells (required with --topology grid)
    #[arg(long)]
    pub width: Option<usize>,

    /// Independent channel planes per grid cell
    #[arg(long, default_value_t = 1)]
    pub planes: usize,

    /// Override the step budget from config
    #[arg(long)]
    pub steps: Option<usize>,

    /// Override the rng seed from config
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the restart count from config
    #[arg(long)]
    pub restarts: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyArg {
    /// 1-D strip of LEDs
    Chain,
    /// 2-D LED matrix, optionally with several channel planes per cell
    Grid,
}
