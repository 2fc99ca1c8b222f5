//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! run. Every operator draws from it, so seeding it with
//! [`RandomNumberGenerator::from_seed`] makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genalg_bits::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let bits = rng.fetch_bits(16);
//! assert_eq!(bits.len(), 16);
//!
//! let picked = rng.sample_indices(10, 3);
//! assert_eq!(picked.len(), 3);
//! ```

use rand::{
    distributions::{Distribution, WeightedError, WeightedIndex},
    rngs::StdRng,
    seq::index,
    Rng, SeedableRng,
};

use crate::error::{GeneticError, Result};

/// A wrapper around the `rand` crate's `StdRng` providing the draws the
/// operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform real in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Bernoulli draw: `true` with the given probability.
    ///
    /// A probability of `0.0` never succeeds and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Returns a uniform index in `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty. Callers validate lengths beforehand.
    pub fn gen_index(&mut self, from: usize, to: usize) -> usize {
        self.rng.gen_range(from..to)
    }

    /// Draws `num` independent fair bits.
    pub fn fetch_bits(&mut self, num: usize) -> Vec<bool> {
        (0..num).map(|_| self.rng.gen::<bool>()).collect()
    }

    /// Samples `amount` distinct indices from `0..length`, in random order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }

    /// Samples `amount` distinct indices from `0..weights.len()` with
    /// probability proportional to the weights of the indices still left.
    ///
    /// When every remaining weight is zero the remaining indices are drawn
    /// uniformly.
    ///
    /// # Arguments
    ///
    /// * `weights` - One non-negative weight per index.
    /// * `amount` - The number of distinct indices to draw.
    ///
    /// # Returns
    ///
    /// The drawn indices, in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if more indices are requested than exist and
    /// `InvalidNumericValue` for a negative or NaN weight, or for weights
    /// whose sum is not finite.
    pub fn sample_weighted(&mut self, weights: &[f64], amount: usize) -> Result<Vec<usize>> {
        if amount > weights.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot sample {} individuals from a pool of {}",
                amount,
                weights.len()
            )));
        }

        if !weights.iter().sum::<f64>().is_finite() {
            return Err(GeneticError::InvalidNumericValue(
                "Selection weights must have a finite sum".to_string(),
            ));
        }

        let mut pool: Vec<usize> = (0..weights.len()).collect();
        let mut picked = Vec::with_capacity(amount);

        while picked.len() < amount {
            let slot = match WeightedIndex::new(pool.iter().map(|&i| weights[i])) {
                Ok(dist) => dist.sample(&mut self.rng),
                Err(WeightedError::AllWeightsZero) => self.gen_index(0, pool.len()),
                Err(e) => {
                    return Err(GeneticError::InvalidNumericValue(format!(
                        "Invalid selection weight: {}",
                        e
                    )))
                }
            };
            picked.push(pool.swap_remove(slot));
        }

        Ok(picked)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
