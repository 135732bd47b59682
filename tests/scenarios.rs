//! End-to-end scenarios for the year step.
//!
//! Each test builds a small, fully controlled run (no entrant inflow unless
//! stated) and checks the outcome of whole simulated years.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use cursus::score::assess;
use cursus::{
    AgentPool, ConfigError, Politician, Report, ScoreRules, Simulation, SimulationConfig,
    Standing,
};

/// Configuration with the default ladder ages and no entrants.
fn quiet(seats: Vec<usize>) -> SimulationConfig {
    SimulationConfig {
        seats_per_rank: seats,
        entrant_distribution_mean: 0.0,
        entrant_distribution_std_dev: 0.0,
        seed: Some(1),
        ..SimulationConfig::default()
    }
}

/// The only politician left in a single-agent pool.
fn first(pool: &AgentPool) -> Politician {
    *pool.iter().next().unwrap()
}

#[test]
fn test_empty_pool_single_entry_seat() {
    let config = SimulationConfig {
        horizon_years: 1,
        ..quiet(vec![1, 0, 0, 0])
    };
    let mut sim = Simulation::from_parts(config, AgentPool::new(), 0).unwrap();

    let history = sim.run();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].promotions, vec![0, 0, 0, 0]);
    assert_eq!(history[0].score.unfilled_seats, 1);
    assert_eq!(history[0].score.total(), -5);
    assert_eq!(sim.score(), 95);
}

#[test]
fn test_eligible_politician_fills_vacancy_above() {
    let pool: AgentPool =
        std::iter::once(Politician::new(36, Standing::Seated(0)).with_tenure(2)).collect();
    let mut sim = Simulation::from_parts(quiet(vec![1, 1, 0, 0]), pool, 0).unwrap();

    let outcome = sim.step();

    assert_eq!(outcome.promotions, vec![0, 1, 0, 0]);
    assert_eq!(sim.pool().occupants(1), 1);
    assert_eq!(sim.pool().occupants(0), 0);
    // The entry seat is now empty.
    assert_eq!(outcome.score.total(), -5);
}

#[test]
fn test_apex_cooldown_window() {
    let consul = || Politician::new(50, Standing::Seated(3)).elected_apex_in(5);
    let config = quiet(vec![0, 0, 0, 1]);

    // Year 10: 10 - 5 < 10, one penalty.
    let pool: AgentPool = std::iter::once(consul()).collect();
    let mut sim = Simulation::from_parts(config.clone(), pool, 9).unwrap();
    let outcome = sim.step();
    assert_eq!(outcome.year, 10);
    assert_eq!(outcome.score.cooling_down, 1);
    assert_eq!(outcome.score.total(), -10);

    // Year 16: 16 - 5 >= 10, no penalty.
    let pool: AgentPool = std::iter::once(consul()).collect();
    let mut sim = Simulation::from_parts(config, pool, 15).unwrap();
    let outcome = sim.step();
    assert_eq!(outcome.year, 16);
    assert_eq!(outcome.score.cooling_down, 0);
    assert_eq!(outcome.score.total(), 0);
}

#[test]
fn test_new_apex_holder_penalized_in_year_of_election() {
    let pool: AgentPool =
        std::iter::once(Politician::new(45, Standing::Seated(2)).with_tenure(5)).collect();
    let mut sim = Simulation::from_parts(quiet(vec![0, 0, 1, 1]), pool, 0).unwrap();

    let outcome = sim.step();

    assert_eq!(outcome.promotions, vec![0, 0, 0, 1]);
    assert_eq!(first(sim.pool()).last_apex_year, Some(1));
    // Vacated praetor seat plus the fresh consul.
    assert_eq!(outcome.score.unfilled_seats, 1);
    assert_eq!(outcome.score.cooling_down, 1);
    assert_eq!(outcome.score.total(), -15);
}

#[test]
fn test_attrition_removes_in_the_same_year() {
    let pool: AgentPool = [
        Politician::new(80, Standing::Seated(0)),
        Politician::new(79, Standing::Seated(0)),
    ]
    .into_iter()
    .collect();
    let mut sim = Simulation::from_parts(quiet(vec![2, 0, 0, 0]), pool, 0).unwrap();

    let outcome = sim.step();

    assert_eq!(outcome.retired, 1);
    assert_eq!(sim.pool().len(), 1);
    assert_eq!(first(sim.pool()).age, 80);
    assert_eq!(outcome.score.unfilled_seats, 1);
}

#[test]
fn test_entrants_backfill_entry_seats() {
    let config = SimulationConfig {
        entrant_distribution_mean: 4.0,
        ..quiet(vec![3, 0, 0, 0])
    };
    let mut sim = Simulation::from_parts(config, AgentPool::new(), 0).unwrap();

    let outcome = sim.step();

    assert_eq!(outcome.entrants, 4);
    assert_eq!(outcome.promotions[0], 3);
    assert_eq!(sim.pool().occupants(0), 3);
    assert_eq!(
        sim.pool().count_where(|p| p.standing == Standing::Candidate),
        1
    );
}

#[test]
fn test_keep_tenure_across_promotion() {
    let pool = || -> AgentPool {
        std::iter::once(Politician::new(40, Standing::Seated(0)).with_tenure(6)).collect()
    };

    let mut reset = Simulation::from_parts(quiet(vec![1, 1, 0, 0]), pool(), 0).unwrap();
    reset.step();
    assert_eq!(first(reset.pool()).tenure, 0);

    let config = SimulationConfig {
        reset_tenure_on_promotion: false,
        ..quiet(vec![1, 1, 0, 0])
    };
    let mut kept = Simulation::from_parts(config, pool(), 0).unwrap();
    kept.step();
    assert_eq!(first(kept.pool()).tenure, 7);
}

#[test]
fn test_score_assessment_is_pure() {
    let config = SimulationConfig {
        horizon_years: 30,
        seed: Some(11),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    sim.run();

    let rules = ScoreRules::default();
    let first = assess(sim.ladder(), sim.pool(), &rules, sim.year());
    let second = assess(sim.ladder(), sim.pool(), &rules, sim.year());
    assert_eq!(first, second);
}

#[test]
fn test_full_reference_run() {
    let config = SimulationConfig {
        seed: Some(2024),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config).unwrap();
    let history = sim.run();

    assert_eq!(history.len(), 200);
    assert_eq!(sim.year(), 200);

    let report = Report::from_simulation(&sim);
    assert_eq!(report.final_score, sim.score());
    for rank in &report.ranks {
        assert!(rank.occupants <= rank.seats);
        let rate = rank.fill_rate.unwrap();
        assert!((0.0..=100.0).contains(&rate));
        if let Some(ages) = rank.ages {
            assert!(ages.min <= ages.max);
            assert!(ages.max <= 80);
        }
    }

    // Reporting twice on the same state gives the same output.
    assert_eq!(report.render_text(), Report::from_simulation(&sim).render_text());
}

#[test]
fn test_over_capacity_pool_rejected() {
    let pool: AgentPool =
        std::iter::repeat_n(Politician::new(30, Standing::Seated(0)), 5).collect();

    let result = Simulation::from_parts(quiet(vec![1, 0, 0, 0]), pool, 0);

    assert_eq!(result.err(), Some(ConfigError::InconsistentPool { violations: 1 }));
}

#[test]
fn test_pool_with_underage_or_retired_politicians_rejected() {
    let pool: AgentPool = [
        Politician::new(35, Standing::Seated(3)),
        Politician::new(81, Standing::Candidate),
    ]
    .into_iter()
    .collect();

    let result = Simulation::from_parts(quiet(vec![1, 1, 1, 1]), pool, 0);

    assert_eq!(result.err(), Some(ConfigError::InconsistentPool { violations: 2 }));
}
