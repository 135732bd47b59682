//! Randomness for a run: entrant counts and promotion tie-breaks.

// Entrant draws are rounded and clamped before the cast
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::error::ConfigError;

/// Seeded random source owned by a single simulation.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: SmallRng,
    entrants: Normal<f64>,
}

impl SimRng {
    /// Create a random source with a normal entrant distribution.
    ///
    /// With no seed the generator is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution parameters are not finite or the
    /// standard deviation is negative.
    pub fn new(seed: Option<u64>, mean: f64, std_dev: f64) -> Result<Self, ConfigError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ConfigError::InvalidDistribution { mean, std_dev });
        }
        let entrants = Normal::new(mean, std_dev)
            .map_err(|_| ConfigError::InvalidDistribution { mean, std_dev })?;
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self { rng, entrants })
    }

    /// Draw this year's entrant count: rounded to the nearest integer and
    /// floored at zero.
    pub fn sample_entrant_count(&mut self) -> u32 {
        let draw = self.entrants.sample(&mut self.rng).round();
        if draw <= 0.0 {
            0
        } else {
            draw.min(f64::from(u32::MAX)) as u32
        }
    }

    /// Uniformly permute `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
