//! Scorecast CLI - Monte Carlo scoring simulations from a YAML config
//!
//! Reads a config describing teams, alliances, events and score payouts,
//! simulates the season many times, and reports average finishing position
//! and average points per team.

mod config;
mod run_cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scorecast")]
#[command(about = "Monte Carlo simulator for team and alliance scoring events")]
struct Cli {
    #[command(flatten)]
    args: run_cmd::RunArgs,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_cmd::run(cli.args)
}

/// INFO by default, -v raises to DEBUG, RUST_LOG overrides both
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
