use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cvr_chart::Tails;

#[derive(Parser, Debug)]
#[command(
    name = "cvr-chart",
    version,
    about = "Conversion-rate distribution charts for A/B tests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the control and experimental distributions to SVG
    Plot(PlotArgs),
    /// Print a seeded sample of 0/1 outcomes
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// File of control outcomes (0/1 separated by whitespace or commas)
    #[arg(long)]
    pub control: PathBuf,

    /// File of experimental outcomes
    #[arg(long)]
    pub experimental: PathBuf,

    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// 1 for one-tailed, 2 for two-tailed
    #[arg(long, default_value = "2", value_parser = parse_tails)]
    pub tails: Tails,

    #[arg(long, default_value = "cvr.svg")]
    pub output: PathBuf,

    /// JSON file overriding chart style defaults
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Print the computed statistics as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(long)]
    pub trials: usize,

    /// True conversion rate in [0, 1]
    #[arg(long)]
    pub rate: f64,

    #[arg(long, default_value_t = 24601)]
    pub seed: u64,
}

fn parse_tails(s: &str) -> Result<Tails, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a tail count"))?;
    Tails::try_from(n).map_err(|e| e.to_string())
}
