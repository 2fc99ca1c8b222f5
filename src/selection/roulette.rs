use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_request, SelectionStrategy};

/// Offset added to inverted fitness so the best individual of a minimization
/// run keeps a non-zero weight.
pub const MINIMIZATION_EPSILON: f64 = 1e-9;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Individuals are drawn without replacement with probability proportional to
/// a weight derived from their fitness:
///
/// - maximizing: the fitness itself, shifted up by the most negative score
///   when any score is negative;
/// - minimizing: `max_fitness - fitness + ε`, so lower scores weigh more.
///
/// When every remaining weight is zero the draw falls back to uniform.
///
/// # Examples
///
/// ```
/// use genalg_bits::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genalg_bits::rng::RandomNumberGenerator;
/// use genalg_bits::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = RouletteWheelSelection::new(true);
///     let selected = selection.select(&fitness, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RouletteWheelSelection {
    /// Whether higher fitness is better (true) or lower fitness is better (false).
    higher_is_better: bool,
}

impl RouletteWheelSelection {
    pub fn new(higher_is_better: bool) -> Self {
        Self { higher_is_better }
    }

    /// Turns fitness scores into non-negative selection weights.
    ///
    /// The weights are rescaled so the largest one is `1.0`, which keeps
    /// their sum finite for any finite scores. Only their ratios matter.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of the population, in collection order.
    ///
    /// # Returns
    ///
    /// One weight per score, in the same order.
    pub fn weights(&self, fitness: &[f64]) -> Vec<f64> {
        // Halved first: the difference of two finite halves is always finite
        let halved: Vec<f64> = if self.higher_is_better {
            let floor = fitness
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min)
                .min(0.0);
            fitness.iter().map(|&f| 0.5 * f - 0.5 * floor).collect()
        } else {
            let max_fitness = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            fitness
                .iter()
                .map(|&f| 0.5 * max_fitness - 0.5 * f + 0.5 * MINIMIZATION_EPSILON)
                .collect()
        };

        let largest = halved.iter().copied().fold(0.0, f64::max);
        if largest > 0.0 {
            halved.into_iter().map(|w| w / largest).collect()
        } else {
            halved
        }
    }
}

impl Default for RouletteWheelSelection {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        check_request(fitness, num_to_select)?;

        let weights = self.weights(fitness);
        rng.sample_weighted(&weights, num_to_select)
    }
}
