//! PSI, the run's single health score.
//!
//! Each year the score loses a fixed penalty per unfilled seat and a fixed
//! penalty per apex holder still inside the cooldown window. There is no
//! floor or ceiling.

use serde::{Deserialize, Serialize};

use crate::ladder::CareerLadder;
use crate::pool::AgentPool;

/// Penalty weights applied by [`assess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Points lost per unfilled seat per year.
    pub vacancy_penalty: i64,
    /// Points lost per apex holder inside the cooldown window per year.
    pub cooldown_penalty: i64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            vacancy_penalty: 5,
            cooldown_penalty: 10,
        }
    }
}

/// Breakdown of one year's score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreDelta {
    /// Unfilled seats summed over all ranks.
    pub unfilled_seats: usize,
    /// Apex holders inside the cooldown window.
    pub cooling_down: usize,
    /// Points lost to unfilled seats.
    pub vacancy_penalty: i64,
    /// Points lost to cooldown violations.
    pub cooldown_penalty: i64,
}

impl ScoreDelta {
    /// Net change to apply to the score (never positive).
    #[must_use]
    pub const fn total(&self) -> i64 {
        -(self.vacancy_penalty + self.cooldown_penalty)
    }
}

/// Compute the score adjustment for `year` from post-promotion state.
///
/// Pure: the same pool, ladder, rules, and year always give the same delta.
/// The cooldown rule is evaluated once per apex holder, independent of the
/// per-rank vacancy sum.
#[must_use]
pub fn assess(
    ladder: &CareerLadder,
    pool: &AgentPool,
    rules: &ScoreRules,
    year: u32,
) -> ScoreDelta {
    let occupancy = pool.occupancy(ladder.len());
    let unfilled_seats: usize = ladder
        .iter()
        .map(|(rank, spec)| spec.seats.saturating_sub(occupancy[rank]))
        .sum();

    let apex = ladder.apex();
    let cooldown = ladder.apex_cooldown_years();
    let cooling_down = pool.count_where(|p| p.holds(apex) && p.is_cooling_down(year, cooldown));

    ScoreDelta {
        unfilled_seats,
        cooling_down,
        vacancy_penalty: penalty(rules.vacancy_penalty, unfilled_seats),
        cooldown_penalty: penalty(rules.cooldown_penalty, cooling_down),
    }
}

fn penalty(weight: i64, count: usize) -> i64 {
    weight.saturating_mul(i64::try_from(count).unwrap_or(i64::MAX))
}

/// The accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psi {
    value: i64,
}

impl Psi {
    /// Start the score at `initial`.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self { value: initial }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Apply one year's adjustment.
    pub fn apply(&mut self, delta: &ScoreDelta) {
        self.value = self.value.saturating_add(delta.total());
    }
}
