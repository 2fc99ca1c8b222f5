use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_request, SelectionStrategy};

/// A selection strategy that keeps the best individuals based on fitness.
///
/// Individuals are sorted by fitness (descending when maximizing, ascending
/// when minimizing) and the first `num_to_select` are kept. The sort is
/// stable, so equal scores keep their original relative order.
///
/// # Examples
///
/// ```
/// use genalg_bits::selection::{ElitistSelection, SelectionStrategy};
/// use genalg_bits::rng::RandomNumberGenerator;
/// use genalg_bits::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::new();
///
///     // Higher fitness is better
///     let selection = ElitistSelection::new(true);
///     let selected = selection.select(&fitness, 2, &mut rng)?;
///     assert_eq!(selected, vec![3, 1]);
///
///     // Lower fitness is better
///     let selection = ElitistSelection::new(false);
///     let selected = selection.select(&fitness, 2, &mut rng)?;
///     assert_eq!(selected, vec![4, 2]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ElitistSelection {
    /// Whether higher fitness is better (true) or lower fitness is better (false).
    higher_is_better: bool,
}

impl ElitistSelection {
    pub fn new(higher_is_better: bool) -> Self {
        Self { higher_is_better }
    }

    /// All indices ordered from best to worst.
    pub fn rank(&self, fitness: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by(|&a, &b| {
            let cmp = fitness[a].total_cmp(&fitness[b]);
            if self.higher_is_better {
                cmp.reverse()
            } else {
                cmp
            }
        });
        order
    }
}

impl Default for ElitistSelection {
    /// Higher fitness is considered better.
    fn default() -> Self {
        Self {
            higher_is_better: true,
        }
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        check_request(fitness, num_to_select)?;

        let mut order = self.rank(fitness);
        order.truncate(num_to_select);
        Ok(order)
    }
}
