use clap::{Parser, ValueEnum};

use crate::{colony::ColonyParameters, config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two human readable lines.
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Ant colony optimization for the travelling salesman problem")]
pub struct Args {
    #[arg(short, long = "ants", default_value_t = config::ANT_COUNT)]
    /// Number of ants sent out in every iteration.
    pub ant_count: usize,

    #[arg(long, default_value_t = config::ALPHA)]
    pub alpha: f64,

    #[arg(long, default_value_t = config::BETA)]
    pub beta: f64,

    #[arg(long, default_value_t = config::RHO)]
    /// Evaporation rate.
    pub rho: f64,

    #[arg(short, default_value_t = config::Q)]
    pub q: f64,

    #[arg(short, long, default_value_t = config::ITERATIONS)]
    pub iterations: u32,

    #[arg(short, long)]
    /// Random seed. A random one is picked (and logged) if not given.
    pub seed: Option<u64>,

    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    pub fn colony_parameters(&self) -> ColonyParameters {
        ColonyParameters {
            ant_count: self.ant_count,
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            q: self.q,
        }
    }
}
