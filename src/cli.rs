//! CLI command implementations for Cursus.

pub(crate) mod batch;
pub(crate) mod logger;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use cursus::{ConfigError, SimulationConfig};
use std::error::Error;
use std::fmt;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `batch` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BatchFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Model parameters shared by every command.
///
/// Anything left unset keeps the default four-office ladder.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ModelArgs {
    /// Years to simulate (default: 200)
    #[arg(short = 'y', long, default_value = "200")]
    years: u32,

    /// Seats per rank, entry office first (e.g. 20,10,8,2)
    #[arg(long, value_delimiter = ',')]
    seats: Option<Vec<usize>>,

    /// Minimum age per rank (e.g. 30,36,39,42)
    #[arg(long, value_delimiter = ',')]
    min_ages: Option<Vec<u32>>,

    /// Years at the rank below required per rank (e.g. 0,2,2,2)
    #[arg(long, value_delimiter = ',')]
    min_tenures: Option<Vec<u32>>,

    /// Office names per rank (e.g. Quaestor,Aedile,Praetor,Consul)
    #[arg(long, value_delimiter = ',')]
    names: Option<Vec<String>>,

    /// Mean yearly entrant count (default: 15)
    #[arg(long, allow_negative_numbers = true)]
    entrant_mean: Option<f64>,

    /// Standard deviation of the yearly entrant count (default: 5)
    #[arg(long)]
    entrant_std_dev: Option<f64>,

    /// Apex cooldown in years (default: 10)
    #[arg(long)]
    cooldown: Option<u32>,

    /// Starting PSI (default: 100)
    #[arg(long, allow_negative_numbers = true)]
    initial_score: Option<i64>,

    /// Politicians older than this retire (default: 80)
    #[arg(long)]
    attrition_age: Option<u32>,

    /// PSI lost per unfilled seat per year (default: 5)
    #[arg(long)]
    vacancy_penalty: Option<i64>,

    /// PSI lost per apex holder inside the cooldown per year (default: 10)
    #[arg(long)]
    cooldown_penalty: Option<i64>,

    /// Keep counting tenure across promotions instead of restarting it
    #[arg(long)]
    keep_tenure: bool,
}

impl ModelArgs {
    /// Build a run configuration with the given seed.
    pub(crate) fn to_config(&self, seed: u64) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        let seats = self.seats.clone().unwrap_or(defaults.seats_per_rank);
        // Custom ladders drop the default office names unless new ones are given.
        let rank_names = match (&self.names, &self.seats) {
            (Some(names), _) => names.clone(),
            (None, Some(_)) => Vec::new(),
            (None, None) => defaults.rank_names,
        };

        SimulationConfig {
            horizon_years: self.years,
            seats_per_rank: seats,
            min_age_per_rank: self.min_ages.clone().unwrap_or(defaults.min_age_per_rank),
            min_tenure_per_rank: self
                .min_tenures
                .clone()
                .unwrap_or(defaults.min_tenure_per_rank),
            rank_names,
            entrant_distribution_mean: self
                .entrant_mean
                .unwrap_or(defaults.entrant_distribution_mean),
            entrant_distribution_std_dev: self
                .entrant_std_dev
                .unwrap_or(defaults.entrant_distribution_std_dev),
            apex_cooldown_years: self.cooldown.unwrap_or(defaults.apex_cooldown_years),
            initial_score: self.initial_score.unwrap_or(defaults.initial_score),
            attrition_age: self.attrition_age.unwrap_or(defaults.attrition_age),
            vacancy_penalty: self.vacancy_penalty.unwrap_or(defaults.vacancy_penalty),
            cooldown_penalty: self.cooldown_penalty.unwrap_or(defaults.cooldown_penalty),
            reset_tenure_on_promotion: !self.keep_tenure,
            seed: Some(seed),
        }
    }
}

/// Use the given seed or draw a fresh one from OS entropy.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(format!("Invalid configuration: {e}"))
    }
}
