//! Run configuration.
//!
//! Defaults reproduce the classic four-office ladder: twenty quaestors, ten
//! aediles, eight praetors, and two consuls, simulated for two hundred years.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ladder::{CareerLadder, RankSpec};
use crate::score::ScoreRules;

/// Every recognized option for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Number of years to simulate.
    pub horizon_years: u32,
    /// Seats per rank, entry office first.
    pub seats_per_rank: Vec<usize>,
    /// Minimum age to enter each rank.
    pub min_age_per_rank: Vec<u32>,
    /// Years at the standing below required to enter each rank.
    pub min_tenure_per_rank: Vec<u32>,
    /// Office names; empty means "Rank N".
    pub rank_names: Vec<String>,
    /// Mean of the yearly entrant count.
    pub entrant_distribution_mean: f64,
    /// Standard deviation of the yearly entrant count.
    pub entrant_distribution_std_dev: f64,
    /// Years after attaining the apex during which holding it is penalized.
    pub apex_cooldown_years: u32,
    /// Starting PSI.
    pub initial_score: i64,
    /// Politicians older than this are removed.
    pub attrition_age: u32,
    /// PSI lost per unfilled seat per year.
    pub vacancy_penalty: i64,
    /// PSI lost per apex holder inside the cooldown window per year.
    pub cooldown_penalty: i64,
    /// Whether tenure restarts at zero on promotion.
    pub reset_tenure_on_promotion: bool,
    /// RNG seed (`None` seeds from OS entropy).
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_years: 200,
            seats_per_rank: vec![20, 10, 8, 2],
            min_age_per_rank: vec![30, 36, 39, 42],
            min_tenure_per_rank: vec![0, 2, 2, 2],
            rank_names: ["Quaestor", "Aedile", "Praetor", "Consul"]
                .map(String::from)
                .to_vec(),
            entrant_distribution_mean: 15.0,
            entrant_distribution_std_dev: 5.0,
            apex_cooldown_years: 10,
            initial_score: 100,
            attrition_age: 80,
            vacancy_penalty: 5,
            cooldown_penalty: 10,
            reset_tenure_on_promotion: true,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Number of ranks implied by the seat table.
    #[must_use]
    pub fn ranks(&self) -> usize {
        self.seats_per_rank.len()
    }

    /// Check the configuration for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.ranks();
        if expected == 0 {
            return Err(ConfigError::NoRanks);
        }

        let tables = [
            ("minAgePerRank", self.min_age_per_rank.len()),
            ("minTenurePerRank", self.min_tenure_per_rank.len()),
        ];
        for (table, found) in tables {
            if found != expected {
                return Err(ConfigError::RankTableMismatch {
                    table,
                    expected,
                    found,
                });
            }
        }
        if !self.rank_names.is_empty() && self.rank_names.len() != expected {
            return Err(ConfigError::RankTableMismatch {
                table: "rankNames",
                expected,
                found: self.rank_names.len(),
            });
        }

        let (mean, std_dev) = (
            self.entrant_distribution_mean,
            self.entrant_distribution_std_dev,
        );
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ConfigError::InvalidDistribution { mean, std_dev });
        }

        let entry_age = self.min_age_per_rank[0];
        if self.attrition_age < entry_age {
            return Err(ConfigError::AttritionBelowEntryAge {
                attrition_age: self.attrition_age,
                entry_age,
            });
        }

        Ok(())
    }

    /// Build the career ladder described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn ladder(&self) -> Result<CareerLadder, ConfigError> {
        self.validate()?;
        let ranks = (0..self.ranks())
            .map(|rank| RankSpec {
                name: self
                    .rank_names
                    .get(rank)
                    .cloned()
                    .unwrap_or_else(|| format!("Rank {rank}")),
                seats: self.seats_per_rank[rank],
                min_age: self.min_age_per_rank[rank],
                min_tenure: self.min_tenure_per_rank[rank],
            })
            .collect();
        CareerLadder::new(ranks, self.apex_cooldown_years).ok_or(ConfigError::NoRanks)
    }

    /// Penalty weights for the score.
    #[must_use]
    pub const fn score_rules(&self) -> ScoreRules {
        ScoreRules {
            vacancy_penalty: self.vacancy_penalty,
            cooldown_penalty: self.cooldown_penalty,
        }
    }
}
