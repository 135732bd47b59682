//! Error types for building a simulation.
//!
//! The year step itself is total: every failure the crate can report is a
//! configuration or starting-pool problem detected before the first
//! simulated year.

use std::fmt;

/// Problems rejected by [`SimulationConfig::validate`] and
/// [`Simulation::from_parts`].
///
/// [`SimulationConfig::validate`]: crate::config::SimulationConfig::validate
/// [`Simulation::from_parts`]: crate::engine::Simulation::from_parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The ladder has no ranks at all.
    NoRanks,
    /// A per-rank table does not have one entry per rank.
    RankTableMismatch {
        /// Name of the offending table.
        table: &'static str,
        /// Number of ranks implied by the seat table.
        expected: usize,
        /// Number of entries actually supplied.
        found: usize,
    },
    /// The entrant-count distribution cannot be sampled.
    InvalidDistribution {
        /// Configured mean.
        mean: f64,
        /// Configured standard deviation.
        std_dev: f64,
    },
    /// Entrants would be created already past the attrition age.
    AttritionBelowEntryAge {
        /// Configured attrition age.
        attrition_age: u32,
        /// Minimum age of the entry rank.
        entry_age: u32,
    },
    /// A starting pool breaks the simulation invariants for its ladder.
    InconsistentPool {
        /// Number of invariant violations found.
        violations: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoRanks => write!(f, "career ladder must have at least one rank"),
            ConfigError::RankTableMismatch {
                table,
                expected,
                found,
            } => write!(
                f,
                "{table} has {found} entries but the ladder has {expected} ranks"
            ),
            ConfigError::InvalidDistribution { mean, std_dev } => write!(
                f,
                "invalid entrant distribution (mean {mean}, std-dev {std_dev})"
            ),
            ConfigError::AttritionBelowEntryAge {
                attrition_age,
                entry_age,
            } => write!(
                f,
                "attrition age {attrition_age} is below the entry age {entry_age}"
            ),
            ConfigError::InconsistentPool { violations } => write!(
                f,
                "starting pool has {violations} invariant violation(s) for this ladder"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::RankTableMismatch {
            table: "minAgePerRank",
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("minAgePerRank"));
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));

        let err = ConfigError::AttritionBelowEntryAge {
            attrition_age: 20,
            entry_age: 30,
        };
        assert!(err.to_string().contains("below the entry age 30"));

        let err = ConfigError::InconsistentPool { violations: 2 };
        assert!(err.to_string().contains("2 invariant violation"));
    }
}
