#![no_main]

//! Year-step fuzzer.
//!
//! Drives arbitrary ladders, inflows, and seeds through whole simulated
//! years and checks the invariants after each one:
//! 1. Seat caps hold for every rank
//! 2. Nobody survives past the attrition age
//! 3. Seated politicians meet their rank's minimum age

use arbitrary::Arbitrary;
use cursus::engine::check_invariants;
use cursus::{Simulation, SimulationConfig};
use libfuzzer_sys::fuzz_target;

/// One rank of a fuzzer-generated ladder.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzRank {
    seats: u8,
    min_age_step: u8,
    min_tenure: u8,
}

/// Structured input for year-step fuzzing.
#[derive(Arbitrary, Debug)]
struct YearStepInput {
    /// Ladder ranks, entry office first (capped to 8).
    ranks: Vec<FuzzRank>,
    /// Entry age.
    entry_age: u8,
    /// Years between entry age and attrition.
    career_span: u8,
    /// Entrant mean (capped to avoid OOM).
    entrant_mean: u8,
    /// Entrant spread.
    entrant_std_dev: u8,
    /// Apex cooldown.
    cooldown: u8,
    /// Years to simulate (capped).
    years: u8,
    /// Whether tenure restarts on promotion.
    reset_tenure: bool,
    /// RNG seed.
    seed: u64,
}

fuzz_target!(|input: YearStepInput| {
    let ranks: Vec<FuzzRank> = input.ranks.into_iter().take(8).collect();
    if ranks.is_empty() {
        return;
    }

    // Minimum ages never decrease up the ladder
    let entry_age = u32::from(input.entry_age.min(60));
    let mut min_ages = Vec::with_capacity(ranks.len());
    let mut age = entry_age;
    for (i, rank) in ranks.iter().enumerate() {
        if i > 0 {
            age += u32::from(rank.min_age_step % 8);
        }
        min_ages.push(age);
    }

    let config = SimulationConfig {
        horizon_years: u32::from(input.years.min(120)),
        seats_per_rank: ranks.iter().map(|r| usize::from(r.seats % 40)).collect(),
        min_age_per_rank: min_ages,
        min_tenure_per_rank: ranks.iter().map(|r| u32::from(r.min_tenure % 6)).collect(),
        rank_names: Vec::new(),
        entrant_distribution_mean: f64::from(input.entrant_mean.min(60)),
        entrant_distribution_std_dev: f64::from(input.entrant_std_dev.min(20)),
        apex_cooldown_years: u32::from(input.cooldown),
        attrition_age: entry_age + u32::from(input.career_span),
        reset_tenure_on_promotion: input.reset_tenure,
        seed: Some(input.seed),
        ..SimulationConfig::default()
    };
    let attrition_age = config.attrition_age;

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(_) => return,
    };

    while !sim.is_finished() {
        let outcome = sim.step();
        assert!(outcome.score.total() <= 0, "Score adjustment must never reward");

        let violations = check_invariants(sim.ladder(), sim.pool(), attrition_age);
        assert!(
            violations.is_empty(),
            "Invariants violated in year {}: {:?}",
            outcome.year,
            violations
        );
    }
});
