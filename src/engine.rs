//! The year-step engine.
//!
//! A [`Simulation`] owns the whole mutable state of a run: the politician
//! pool, the score, the random source, and the current year. Each call to
//! [`Simulation::step`] advances exactly one year through five phases:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  1. Ageing and attrition            │
//! ├─────────────────────────────────────┤
//! │  2. Entrant inflow                  │
//! ├─────────────────────────────────────┤
//! │  3. Eligibility snapshot            │
//! ├─────────────────────────────────────┤
//! │  4. Promotion, apex first           │
//! ├─────────────────────────────────────┤
//! │  5. Score adjustment                │
//! └─────────────────────────────────────┘
//! ```

mod invariants;
mod promotion;

pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use promotion::{eligibility, promote};

use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::ladder::CareerLadder;
use crate::pool::{AgentPool, Politician};
use crate::rng::SimRng;
use crate::score::{Psi, ScoreDelta, ScoreRules, assess};

/// What happened in one simulated year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOutcome {
    /// The year just simulated (first year is 1).
    pub year: u32,
    /// Politicians removed for passing the attrition age.
    pub retired: usize,
    /// New entrants added.
    pub entrants: u32,
    /// Promotions into each rank.
    pub promotions: Vec<usize>,
    /// Score adjustment breakdown.
    pub score: ScoreDelta,
    /// PSI after the adjustment.
    pub psi: i64,
}

/// A single simulation run.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    ladder: CareerLadder,
    rules: ScoreRules,
    pool: AgentPool,
    psi: Psi,
    rng: SimRng,
    year: u32,
}

impl Simulation {
    /// Create a run at year 0 with every seat filled.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let ladder = config.ladder()?;
        let pool = AgentPool::seeded(&ladder);
        Self::assemble(config, ladder, pool, 0)
    }

    /// Create a run from an existing pool whose last completed year is `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or
    /// [`ConfigError::InconsistentPool`] if the pool overfills a rank, holds
    /// anyone past the attrition age, or seats anyone below their rank's
    /// minimum age.
    pub fn from_parts(
        config: SimulationConfig,
        pool: AgentPool,
        year: u32,
    ) -> Result<Self, ConfigError> {
        let ladder = config.ladder()?;
        let violations = check_invariants(&ladder, &pool, config.attrition_age);
        if !violations.is_empty() {
            for violation in &violations {
                log::warn!("{violation}");
            }
            return Err(ConfigError::InconsistentPool {
                violations: violations.len(),
            });
        }
        Self::assemble(config, ladder, pool, year)
    }

    fn assemble(
        config: SimulationConfig,
        ladder: CareerLadder,
        pool: AgentPool,
        year: u32,
    ) -> Result<Self, ConfigError> {
        let rng = SimRng::new(
            config.seed,
            config.entrant_distribution_mean,
            config.entrant_distribution_std_dev,
        )?;
        Ok(Self {
            rules: config.score_rules(),
            psi: Psi::new(config.initial_score),
            config,
            ladder,
            pool,
            rng,
            year,
        })
    }

    /// Advance one year.
    pub fn step(&mut self) -> YearOutcome {
        self.year += 1;
        let year = self.year;

        let attrition_age = self.config.attrition_age;
        self.pool.age_all();
        let retired = self.pool.remove_if(|p| p.age > attrition_age);

        let entrants = self.rng.sample_entrant_count();
        for _ in 0..entrants {
            self.pool.insert(Politician::entrant(&self.ladder));
        }

        let promotions = promote(
            &self.ladder,
            &mut self.pool,
            &mut self.rng,
            year,
            self.config.reset_tenure_on_promotion,
        );

        let score = assess(&self.ladder, &self.pool, &self.rules, year);
        self.psi.apply(&score);

        assert_invariants(&self.ladder, &self.pool, attrition_age);

        log::debug!(
            "year {year}: {retired} retired, {entrants} entered, promotions {promotions:?}, \
             {} unfilled, {} cooling down, PSI {}",
            score.unfilled_seats,
            score.cooling_down,
            self.psi.value()
        );

        YearOutcome {
            year,
            retired,
            entrants,
            promotions,
            score,
            psi: self.psi.value(),
        }
    }

    /// Run every remaining year up to the horizon, returning each year's outcome.
    pub fn run(&mut self) -> Vec<YearOutcome> {
        let horizon = self.config.horizon_years;
        log::info!(
            "simulating years {}..={horizon} with {} politicians",
            self.year + 1,
            self.pool.len()
        );

        let mut history = Vec::with_capacity(horizon.saturating_sub(self.year) as usize);
        while !self.is_finished() {
            history.push(self.step());
        }

        log::info!(
            "finished year {} with PSI {} and {} politicians",
            self.year,
            self.psi.value(),
            self.pool.len()
        );
        history
    }

    /// Whether the horizon has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.year >= self.config.horizon_years
    }

    /// Last completed year (0 before the first step).
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Current PSI.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.psi.value()
    }

    /// The politician pool.
    #[must_use]
    pub const fn pool(&self) -> &AgentPool {
        &self.pool
    }

    /// The career ladder.
    #[must_use]
    pub const fn ladder(&self) -> &CareerLadder {
        &self.ladder
    }

    /// The configuration this run was built from.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::Standing;

    fn quiet_config() -> SimulationConfig {
        SimulationConfig {
            entrant_distribution_mean: 0.0,
            entrant_distribution_std_dev: 0.0,
            seed: Some(42),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_new_starts_at_year_zero_full() {
        let sim = Simulation::new(quiet_config()).unwrap();
        assert_eq!(sim.year(), 0);
        assert_eq!(sim.score(), 100);
        assert_eq!(sim.pool().len(), 40);
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig {
            seats_per_rank: Vec::new(),
            ..quiet_config()
        };
        assert_eq!(Simulation::new(config).err(), Some(ConfigError::NoRanks));
    }

    #[test]
    fn test_first_year_of_full_ladder() {
        let mut sim = Simulation::new(quiet_config()).unwrap();
        let outcome = sim.step();

        assert_eq!(outcome.year, 1);
        assert_eq!(outcome.retired, 0);
        assert_eq!(outcome.entrants, 0);
        // Every seat is still filled and seeded tenure was zero last year.
        assert_eq!(outcome.promotions, vec![0, 0, 0, 0]);
        assert_eq!(outcome.score, ScoreDelta::default());
        assert_eq!(outcome.psi, 100);
    }

    #[test]
    fn test_entrants_join_as_candidates() {
        let config = SimulationConfig {
            seats_per_rank: vec![0, 0, 0, 0],
            entrant_distribution_mean: 3.0,
            ..quiet_config()
        };
        let mut sim = Simulation::new(config).unwrap();
        let outcome = sim.step();

        assert_eq!(outcome.entrants, 3);
        assert_eq!(sim.pool().len(), 3);
        assert!(sim
            .pool()
            .iter()
            .all(|p| p.standing == Standing::Candidate && p.age == 30 && p.tenure == 0));
    }

    #[test]
    fn test_run_reaches_horizon() {
        let config = SimulationConfig {
            horizon_years: 60,
            entrant_distribution_mean: 15.0,
            entrant_distribution_std_dev: 5.0,
            ..quiet_config()
        };
        let mut sim = Simulation::new(config).unwrap();
        let history = sim.run();

        assert_eq!(history.len(), 60);
        assert_eq!(sim.year(), 60);
        assert!(sim.is_finished());
        assert_eq!(history.last().map(|o| o.psi), Some(sim.score()));
        assert!(check_invariants(sim.ladder(), sim.pool(), 80).is_empty());
        // Running again is a no-op.
        assert!(sim.run().is_empty());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimulationConfig {
            horizon_years: 80,
            entrant_distribution_mean: 15.0,
            entrant_distribution_std_dev: 5.0,
            ..quiet_config()
        };
        let a = Simulation::new(config.clone()).unwrap().run();
        let b = Simulation::new(config).unwrap().run();
        assert_eq!(a, b);
    }
}
