//! Run command - simulate the configured season and report standings
//!
//! 1. Load and validate the config file
//! 2. Build the simulation and run all iterations
//! 3. Report per-team standings (text or JSON)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scorecast_core::{Sim, Standing, MAX_ITERATIONS};

use crate::config::load_config;

#[derive(Args)]
pub struct RunArgs {
    /// Config file containing the teams, scores and events
    #[arg(value_name = "FILE")]
    pub config: PathBuf,

    /// Number of iterations to simulate scoring for
    #[arg(
        long,
        default_value = "10000",
        value_parser = clap::value_parser!(u64).range(0..=MAX_ITERATIONS)
    )]
    pub iterations: u64,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the simulation command
pub fn run(args: RunArgs) -> Result<()> {
    let config = load_config(&args.config)?;

    tracing::info!(
        "Starting simulation: {} teams, {} alliance + {} normal events, {} iterations",
        config.teams.len(),
        config.events.alliance,
        config.events.normal,
        args.iterations
    );

    let mut sim = Sim::new(&config).context("Failed to build simulation")?;
    let mut rng = create_rng(args.seed);
    sim.run(args.iterations, &mut rng)
        .context("Simulation run failed")?;

    report_standings(&sim.standings(), sim.iterations_run(), args.json);
    Ok(())
}

fn report_standings(standings: &[Standing], iterations: u64, json: bool) {
    if json {
        print_json_standings(standings, iterations);
    } else {
        print_text_standings(standings, iterations);
    }
}

/// Print standings as text
fn print_text_standings(standings: &[Standing], iterations: u64) {
    println!("\n=== Simulation Results ===");
    println!("Iterations: {}", iterations);
    for standing in standings {
        println!(
            "  {} ({}): avg position {:.2}, avg points {:.2}",
            standing.name, standing.alliance, standing.average_position, standing.average_points
        );
    }
}

/// Print standings as JSON
fn print_json_standings(standings: &[Standing], iterations: u64) {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        iterations: u64,
        standings: &'a [Standing],
    }

    let output = JsonOutput {
        iterations,
        standings,
    };
    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Create RNG from seed or entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));

        use rand::Rng;
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_create_rng_seeds_differ() {
        let mut rng1 = create_rng(Some(1));
        let mut rng2 = create_rng(Some(2));

        use rand::Rng;
        assert_ne!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }
}
