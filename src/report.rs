//! End-of-run summary: final PSI, fill rates, and age distribution per rank.

// Fill rates and mean ages are reported as floats
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

use crate::engine::Simulation;
use crate::ladder::{CareerLadder, Rank, Standing};
use crate::pool::AgentPool;

/// Age statistics for the holders of one rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeStats {
    /// Mean age.
    pub mean: f64,
    /// Youngest holder.
    pub min: u32,
    /// Oldest holder.
    pub max: u32,
}

impl AgeStats {
    /// Compute statistics, or `None` for an empty rank.
    #[must_use]
    pub fn from_ages(ages: &[u32]) -> Option<Self> {
        let min = ages.iter().copied().min()?;
        let max = ages.iter().copied().max()?;
        let total: u64 = ages.iter().copied().map(u64::from).sum();
        Some(Self {
            mean: total as f64 / ages.len() as f64,
            min,
            max,
        })
    }
}

/// Summary for one rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    /// Rank index.
    pub rank: Rank,
    /// Office name.
    pub name: String,
    /// Seats at this rank.
    pub seats: usize,
    /// Politicians holding this rank.
    pub occupants: usize,
    /// `100 * occupants / seats`, or `None` for a rank without seats.
    pub fill_rate: Option<f64>,
    /// Age statistics, or `None` when nobody holds the rank.
    pub ages: Option<AgeStats>,
}

/// Final state of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Last completed year.
    pub year: u32,
    /// Final PSI.
    pub final_score: i64,
    /// Politicians in the pool.
    pub population: usize,
    /// Politicians not yet holding any office.
    pub candidates: usize,
    /// Per-rank summaries, entry office first.
    pub ranks: Vec<RankReport>,
}

impl Report {
    /// Summarize a simulation's current state.
    #[must_use]
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self::from_state(sim.ladder(), sim.pool(), sim.score(), sim.year())
    }

    /// Summarize an arbitrary ladder, pool, and score.
    #[must_use]
    pub fn from_state(
        ladder: &CareerLadder,
        pool: &AgentPool,
        final_score: i64,
        year: u32,
    ) -> Self {
        let occupancy = pool.occupancy(ladder.len());
        let ranks = ladder
            .iter()
            .map(|(rank, spec)| {
                let occupants = occupancy[rank];
                RankReport {
                    rank,
                    name: spec.name.clone(),
                    seats: spec.seats,
                    occupants,
                    fill_rate: (spec.seats > 0)
                        .then(|| 100.0 * occupants as f64 / spec.seats as f64),
                    ages: AgeStats::from_ages(&pool.ages_at(rank)),
                }
            })
            .collect();

        Self {
            year,
            final_score,
            population: pool.len(),
            candidates: pool.count_where(|p| p.standing == Standing::Candidate),
            ranks,
        }
    }

    /// Render the report as human-readable text.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Final PSI: {} (after {} years)\n",
            self.final_score, self.year
        ));
        output.push_str(&format!(
            "Population: {} ({} unseated candidates)\n",
            self.population, self.candidates
        ));
        output.push('\n');

        output.push_str("Fill Rates:\n");
        for rank in &self.ranks {
            match rank.fill_rate {
                Some(rate) => {
                    output.push_str(&format!(
                        "  Rank {} ({}): {rate:.1}% ({}/{} seats)\n",
                        rank.rank, rank.name, rank.occupants, rank.seats
                    ));
                }
                None => {
                    output.push_str(&format!(
                        "  Rank {} ({}): no seats\n",
                        rank.rank, rank.name
                    ));
                }
            }
        }
        output.push('\n');

        output.push_str("Age Distribution:\n");
        for rank in &self.ranks {
            match rank.ages {
                Some(ages) => {
                    output.push_str(&format!(
                        "  Rank {} ({}): Avg = {:.1}, Min = {}, Max = {}\n",
                        rank.rank, rank.name, ages.mean, ages.min, ages.max
                    ));
                }
                None => {
                    output.push_str(&format!(
                        "  Rank {} ({}): no politicians at this rank\n",
                        rank.rank, rank.name
                    ));
                }
            }
        }

        output
    }
}
