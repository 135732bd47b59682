//! Simulation invariants - sanity checks that detect bugs.
//!
//! These should never trigger after a year step on a pool that started out
//! consistent. They are bug detectors, not modelling rules.

use crate::ladder::CareerLadder;
use crate::pool::AgentPool;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all simulation invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(
    ladder: &CareerLadder,
    pool: &AgentPool,
    attrition_age: u32,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Seat cap
    let occupancy = pool.occupancy(ladder.len());
    for (rank, spec) in ladder.iter() {
        if occupancy[rank] > spec.seats {
            violations.push(InvariantViolation {
                message: format!(
                    "{} (rank {rank}) has {} occupants for {} seats",
                    spec.name, occupancy[rank], spec.seats
                ),
            });
        }
    }

    for politician in pool.iter() {
        if politician.age > attrition_age {
            violations.push(InvariantViolation {
                message: format!(
                    "Politician aged {} survived past attrition age {attrition_age}",
                    politician.age
                ),
            });
        }

        let Some(rank) = politician.rank() else {
            continue;
        };
        match ladder.get(rank) {
            None => violations.push(InvariantViolation {
                message: format!("Politician holds rank {rank} beyond the ladder"),
            }),
            Some(spec) if politician.age < spec.min_age => {
                violations.push(InvariantViolation {
                    message: format!(
                        "{} aged {} is below the minimum age {}",
                        spec.name, politician.age, spec.min_age
                    ),
                });
            }
            Some(_) => {}
        }
    }

    violations
}

/// Assert all simulation invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(ladder: &CareerLadder, pool: &AgentPool, attrition_age: u32) {
    let violations = check_invariants(ladder, pool, attrition_age);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Simulation invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_ladder: &CareerLadder, _pool: &AgentPool, _attrition_age: u32) {}
