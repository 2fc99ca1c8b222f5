use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// A strategy looks only at the fitness scores of a population and returns the
/// indices of the individuals it keeps, so the caller can move those
/// individuals out of the population without cloning them.
///
/// # Examples
///
/// ```
/// use genalg_bits::selection::{ElitistSelection, SelectionStrategy};
/// use genalg_bits::rng::RandomNumberGenerator;
/// use genalg_bits::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = ElitistSelection::new(false);
///     let selected = selection.select(&fitness, 2, &mut rng)?;
///
///     assert_eq!(selected, vec![2, 0]);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug {
    /// Selects exactly `num_to_select` distinct indices into `fitness`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fitness slice is empty
    /// - `num_to_select` exceeds the number of individuals
    /// - The strategy cannot turn the scores into selection weights
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}

/// Checks the preconditions shared by every strategy.
pub(crate) fn check_request(fitness: &[f64], num_to_select: usize) -> Result<()> {
    if fitness.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if num_to_select > fitness.len() {
        return Err(GeneticError::Configuration(format!(
            "Cannot select {} individuals from a population of {}",
            num_to_select,
            fitness.len()
        )));
    }

    Ok(())
}

/// Whether `candidate` beats `incumbent` under the given direction.
pub fn is_better(candidate: f64, incumbent: f64, maximize: bool) -> bool {
    if maximize {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

/// Index of the best score; the first one wins ties.
///
/// Returns `None` for an empty slice.
pub fn best_index(fitness: &[f64], maximize: bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &score) in fitness.iter().enumerate() {
        match best {
            Some(current) if !is_better(score, fitness[current], maximize) => {}
            _ => best = Some(idx),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_index() {
        let fitness = [0.5, 0.1, 0.9, 0.1, 0.9];
        assert_eq!(best_index(&fitness, false), Some(1));
        assert_eq!(best_index(&fitness, true), Some(2));
        assert_eq!(best_index(&[], true), None);
    }

    #[test]
    fn test_check_request() {
        assert!(matches!(
            check_request(&[], 0),
            Err(GeneticError::EmptyPopulation)
        ));
        assert!(matches!(
            check_request(&[1.0], 2),
            Err(GeneticError::Configuration(_))
        ));
        assert!(check_request(&[1.0, 2.0], 2).is_ok());
    }
}
