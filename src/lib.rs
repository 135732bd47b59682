// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Cursus: a stochastic agent-based model of a political career ladder.
//!
//! A fixed number of seats is spread over an ordered set of ranks. Every
//! simulated year politicians age and retire, new entrants arrive, eligible
//! politicians compete for vacancies, and a single health score (PSI) is
//! penalized for empty seats and for apex holders inside their cooldown.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Driver (CLI) │ Reporter         │
//! ├─────────────────────────────────────┤
//! │         Year-Step Engine            │
//! ├─────────────────────────────────────┤
//! │  Agent Pool │ Ladder │ Score │ RNG  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use cursus::{Report, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     horizon_years: 50,
//!     seed: Some(7),
//!     ..SimulationConfig::default()
//! };
//! let mut sim = Simulation::new(config)?;
//! sim.run();
//! println!("{}", Report::from_simulation(&sim).render_text());
//! # Ok::<(), cursus::ConfigError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ladder;
pub mod pool;
pub mod report;
pub mod rng;
pub mod score;

pub use config::SimulationConfig;
pub use engine::{Simulation, YearOutcome};
pub use error::ConfigError;
pub use ladder::{CareerLadder, Rank, RankSpec, Standing};
pub use pool::{AgentPool, Politician};
pub use report::{AgeStats, RankReport, Report};
pub use rng::SimRng;
pub use score::{Psi, ScoreDelta, ScoreRules};
