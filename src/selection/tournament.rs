use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_request, is_better, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `min(tournament_size, pool_size)` distinct
/// contestants from the pool of individuals not yet selected; the best of
/// them wins and leaves the pool. Tournaments repeat until `num_to_select`
/// winners exist, so no individual is selected twice.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use genalg_bits::selection::{SelectionStrategy, TournamentSelection};
/// use genalg_bits::rng::RandomNumberGenerator;
/// use genalg_bits::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = TournamentSelection::new(2, true)?;
///     let selected = selection.select(&fitness, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
    higher_is_better: bool,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize, higher_is_better: bool) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            higher_is_better,
        })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament over `pool` and returns the position of the
    /// winner within `pool`.
    fn run_tournament(
        &self,
        fitness: &[f64],
        pool: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let contestants = rng.sample_indices(pool.len(), self.tournament_size.min(pool.len()));

        let mut winner = contestants[0];
        for &slot in &contestants[1..] {
            if is_better(
                fitness[pool[slot]],
                fitness[pool[winner]],
                self.higher_is_better,
            ) {
                winner = slot;
            }
        }
        winner
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: 2,
            higher_is_better: true,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        check_request(fitness, num_to_select)?;

        let mut pool: Vec<usize> = (0..fitness.len()).collect();
        let mut selected = Vec::with_capacity(num_to_select);

        while selected.len() < num_to_select {
            let winner = self.run_tournament(fitness, &pool, rng);
            selected.push(pool.swap_remove(winner));
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tournament_selection() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = TournamentSelection::default();
        let selected = selection.select(&fitness, 3, &mut rng).unwrap();

        assert_eq!(selected.len(), 3);
        let unique: HashSet<usize> = selected.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_tournament_with_full_size_is_ranking() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        // Every tournament sees the whole remaining pool
        let selection = TournamentSelection::new(10, true).unwrap();
        let selected = selection.select(&fitness, 5, &mut rng).unwrap();
        assert_eq!(selected, vec![3, 1, 0, 2, 4]);

        let selection = TournamentSelection::new(5, false).unwrap();
        let selected = selection.select(&fitness, 3, &mut rng).unwrap();
        assert_eq!(selected, vec![4, 2, 0]);
    }

    #[test]
    fn test_tournament_size_one_selects_any() {
        let fitness = vec![0.5, 0.8, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selection = TournamentSelection::new(1, true).unwrap();
        let selected = selection.select(&fitness, 3, &mut rng).unwrap();
        let unique: HashSet<usize> = selected.iter().copied().collect();

        assert_eq!(unique, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_tournament_selection_too_many() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let result = TournamentSelection::default().select(&[0.5, 0.8], 3, &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let result = TournamentSelection::default().select(&[], 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0, true).is_err());
    }
}
