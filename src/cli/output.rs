//! Output formatting utilities for CLI.

// Aggregates are reported as floats
#![allow(clippy::cast_precision_loss)]

use cursus::{CareerLadder, Report, SimulationConfig, YearOutcome};
use serde::Serialize;

/// JSON-serializable single-run result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult<'a> {
    /// Seed used for the run.
    pub(super) seed: u64,
    /// Configuration the run was built from.
    pub(super) config: &'a SimulationConfig,
    /// Final state summary.
    pub(super) report: &'a Report,
    /// Year-by-year outcomes, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) history: Option<&'a [YearOutcome]>,
}

/// Aggregated statistics over many runs.
#[derive(Debug)]
pub(super) struct BatchStats {
    /// Total runs summarized.
    pub(super) runs: u64,
    /// Name and seat count per rank.
    ranks: Vec<(String, usize)>,
    /// Sum of final scores.
    score_sum: f64,
    /// Sum of squared final scores for std dev calculation.
    score_sq_sum: f64,
    /// Highest final score seen.
    best_score: Option<i64>,
    /// Lowest final score seen.
    worst_score: Option<i64>,
    /// Sum of fill rates per rank.
    fill_rate_sums: Vec<f64>,
    /// Sum of final population sizes.
    population_sum: f64,
}

impl BatchStats {
    /// Create empty stats for a ladder.
    pub(super) fn new(ladder: &CareerLadder) -> Self {
        Self {
            runs: 0,
            ranks: ladder
                .iter()
                .map(|(_, spec)| (spec.name.clone(), spec.seats))
                .collect(),
            score_sum: 0.0,
            score_sq_sum: 0.0,
            best_score: None,
            worst_score: None,
            fill_rate_sums: vec![0.0; ladder.len()],
            population_sum: 0.0,
        }
    }

    /// Add a finished run to the stats.
    pub(super) fn add_report(&mut self, report: &Report) {
        self.runs += 1;

        let score = report.final_score;
        self.score_sum += score as f64;
        self.score_sq_sum += (score as f64) * (score as f64);
        self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
        self.worst_score = Some(self.worst_score.map_or(score, |worst| worst.min(score)));
        self.population_sum += report.population as f64;

        for rank in &report.ranks {
            if let (Some(sum), Some(rate)) =
                (self.fill_rate_sums.get_mut(rank.rank), rank.fill_rate)
            {
                *sum += rate;
            }
        }
    }

    /// Mean final score.
    pub(super) fn mean_score(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.score_sum / self.runs as f64
    }

    /// Final score standard deviation.
    pub(super) fn score_std_dev(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        let mean = self.mean_score();
        let variance = (self.score_sq_sum / self.runs as f64) - (mean * mean);
        if variance < 0.0 { 0.0 } else { variance.sqrt() }
    }

    /// Mean fill rate for a rank, or `None` for a rank without seats.
    pub(super) fn mean_fill_rate(&self, rank: usize) -> Option<f64> {
        let seats = self.ranks.get(rank).map_or(0, |(_, seats)| *seats);
        if seats == 0 || self.runs == 0 {
            return None;
        }
        self.fill_rate_sums.get(rank).map(|sum| sum / self.runs as f64)
    }

    /// Mean final population.
    pub(super) fn mean_population(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.population_sum / self.runs as f64
    }
}

/// JSON-serializable batch result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult {
    /// Seed of the first run.
    base_seed: u64,
    /// Total runs summarized.
    runs: u64,
    /// Mean final PSI.
    mean_score: f64,
    /// Final PSI standard deviation.
    score_std_dev: f64,
    /// Highest final PSI.
    best_score: Option<i64>,
    /// Lowest final PSI.
    worst_score: Option<i64>,
    /// Mean final population.
    mean_population: f64,
    /// Per-rank averages.
    ranks: Vec<JsonBatchRank>,
}

/// JSON-serializable per-rank batch stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchRank {
    /// Rank index.
    rank: usize,
    /// Office name.
    name: String,
    /// Seats at this rank.
    seats: usize,
    /// Mean fill rate in percent (null for a rank without seats).
    mean_fill_rate: Option<f64>,
}

impl JsonBatchResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &BatchStats, base_seed: u64) -> Self {
        let ranks = stats
            .ranks
            .iter()
            .enumerate()
            .map(|(rank, (name, seats))| JsonBatchRank {
                rank,
                name: name.clone(),
                seats: *seats,
                mean_fill_rate: stats.mean_fill_rate(rank),
            })
            .collect();

        Self {
            base_seed,
            runs: stats.runs,
            mean_score: stats.mean_score(),
            score_std_dev: stats.score_std_dev(),
            best_score: stats.best_score,
            worst_score: stats.worst_score,
            mean_population: stats.mean_population(),
            ranks,
        }
    }
}

/// Format batch stats as human-readable text.
pub(super) fn format_batch_text(stats: &BatchStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Batch Results ({} runs)\n", stats.runs));
    output.push_str("========================================\n\n");

    output.push_str(&format!(
        "Final PSI: {:.1} (+/- {:.1})\n",
        stats.mean_score(),
        stats.score_std_dev()
    ));
    if let (Some(best), Some(worst)) = (stats.best_score, stats.worst_score) {
        output.push_str(&format!("  Best: {best}, Worst: {worst}\n"));
    }
    output.push_str(&format!("Mean Population: {:.1}\n\n", stats.mean_population()));

    output.push_str("Mean Fill Rates:\n");
    for (rank, (name, _)) in stats.ranks.iter().enumerate() {
        match stats.mean_fill_rate(rank) {
            Some(rate) => output.push_str(&format!("  Rank {rank} ({name}): {rate:.1}%\n")),
            None => output.push_str(&format!("  Rank {rank} ({name}): no seats\n")),
        }
    }

    output
}

/// Format batch stats as CSV, one row per rank.
pub(super) fn format_batch_csv(stats: &BatchStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("rank,name,seats,mean_fill_rate,runs,mean_score,score_std_dev\n");

    // Data rows
    for (rank, (name, seats)) in stats.ranks.iter().enumerate() {
        let fill = stats
            .mean_fill_rate(rank)
            .map(|rate| format!("{rate:.4}"))
            .unwrap_or_default();
        output.push_str(&format!(
            "{},{},{},{},{},{:.2},{:.2}\n",
            rank,
            name,
            seats,
            fill,
            stats.runs,
            stats.mean_score(),
            stats.score_std_dev()
        ));
    }

    output
}
