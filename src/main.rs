use std::{error::Error, process::ExitCode};

use ant_colony_tsp::{
    arguments::{Args, OutputFormat},
    colony::{Colony, RunSummary},
    config::{self, Float},
    index::CityIndex,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Serialize)]
struct RunReport<'a> {
    seed: u64,
    iterations: u32,
    fallback_selections: usize,
    best_tour: &'a [CityIndex],
    best_tour_length: Float,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut colony = Colony::new(args.colony_parameters(), &config::CITIES)?;
    debug!(parameters = ?colony.parameters(), "colony created");

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding random number generator");
    let mut rng = SmallRng::seed_from_u64(seed);

    let summary = colony.run(args.iterations, &mut rng);
    print_summary(&summary, seed, args.format)
}

fn print_summary(
    summary: &RunSummary,
    seed: u64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    println!("{}", format_summary(summary, seed, format)?);
    Ok(())
}

fn format_summary(
    summary: &RunSummary,
    seed: u64,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Best tour: {}\nBest tour length: {}",
            summary.best_tour,
            summary.best_tour.length()
        )),
        OutputFormat::Json => {
            let report = RunReport {
                seed,
                iterations: summary.iterations,
                fallback_selections: summary.fallback_selections,
                best_tour: summary.best_tour.cities(),
                best_tour_length: summary.best_tour.length(),
            };
            serde_json::to_string(&report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ant_colony_tsp::colony::ColonyParameters;
    use rand::rngs::mock::StepRng;

    fn summary() -> RunSummary {
        let mut colony = Colony::new(ColonyParameters::default(), &config::CITIES).unwrap();
        colony.run(3, &mut StepRng::new(0, 0))
    }

    #[test]
    fn text_output_is_two_lines() {
        let text = format_summary(&summary(), 7, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Best tour: [0, 1, 2, 3, 4]");
        let length: Float = lines[1]
            .strip_prefix("Best tour length: ")
            .unwrap()
            .parse()
            .unwrap();
        assert!(length.is_finite());
        assert!((length - 4.0 * Float::sqrt(2.0)).abs() < 1e-9);
    }

    #[test]
    fn json_output_carries_the_run() {
        let json = format_summary(&summary(), 7, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 7);
        assert_eq!(value["iterations"], 3);
        assert_eq!(value["best_tour"], serde_json::json!([0, 1, 2, 3, 4]));
        assert!(value["best_tour_length"].as_f64().unwrap().is_finite());
        assert!(value["fallback_selections"].as_u64().unwrap() > 0);
    }
}
