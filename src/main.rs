mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use cvr_chart::{
    Arm, ChartStyle, SignificanceParams, chart::render_svg, compare_cvr_distributions,
    sample::{arm_stats::ensure_non_empty, parse::parse_sample, simulate::simulate_arm},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, PlotArgs, SimulateArgs};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plot(args) => plot(args),
        Commands::Simulate(args) => simulate(args),
    }
}

fn plot(args: PlotArgs) -> Result<()> {
    let control = read_sample(Arm::Control, &args.control)?;
    let experimental = read_sample(Arm::Experimental, &args.experimental)?;
    ensure_non_empty(&control, &experimental)?;
    let params = SignificanceParams::new(args.alpha, args.tails)?;
    let style = match &args.style {
        Some(path) => ChartStyle::from_json_file(path)?,
        None => ChartStyle::default(),
    };

    let comparison = compare_cvr_distributions(&control, &experimental, &params)?;
    info!(
        control_rate = comparison.control.rate,
        experimental_rate = comparison.experimental.rate,
        "compared arms"
    );
    render_svg(&args.output, &comparison, &style)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if args.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &comparison)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let sample = simulate_arm(Arm::Control, args.trials, args.rate, args.seed)?;
    let mut stdout = std::io::stdout().lock();
    for outcome in sample {
        writeln!(stdout, "{outcome}")?;
    }
    Ok(())
}

fn read_sample(arm: Arm, path: &std::path::Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {arm} sample from {}", path.display()))?;
    Ok(parse_sample(arm, &text)?)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvr_chart::{CvrErr, Tails};
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cvr-chart-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("failed to write sample file");
        path
    }

    #[test]
    fn empty_sample_reported_before_bad_alpha() {
        let control = write_temp("empty-control.txt", "# no outcomes\n");
        let experimental = write_temp("experimental.txt", "1 0 1\n");
        let args = PlotArgs {
            control: control.clone(),
            experimental: experimental.clone(),
            alpha: 0.0,
            tails: Tails::TwoTailed,
            output: std::env::temp_dir().join("cvr-chart-unused.svg"),
            style: None,
            json: false,
        };
        let err = plot(args).unwrap_err();
        let cvr_err = err.downcast_ref::<CvrErr>().expect("expected a CvrErr");
        assert!(cvr_err.is_empty_sample());
        std::fs::remove_file(control).unwrap();
        std::fs::remove_file(experimental).unwrap();
    }
}
