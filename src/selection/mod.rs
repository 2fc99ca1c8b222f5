pub mod elitist;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

use std::{fmt, str::FromStr};

pub use elitist::ElitistSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::{best_index, is_better, SelectionStrategy};
pub use tournament::TournamentSelection;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Selection operators selectable from options.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMethod {
    Best,
    Roulette,
    Tournament,
}

impl SelectionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionMethod::Best => "best",
            SelectionMethod::Roulette => "roulette",
            SelectionMethod::Tournament => "tournament",
        }
    }

    /// Runs the selection operator this method names over `fitness`.
    ///
    /// `tournament_size` is only read by [`SelectionMethod::Tournament`].
    pub fn select(
        &self,
        fitness: &[f64],
        num_to_select: usize,
        tournament_size: usize,
        maximize: bool,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            SelectionMethod::Best => {
                ElitistSelection::new(maximize).select(fitness, num_to_select, rng)
            }
            SelectionMethod::Roulette => {
                RouletteWheelSelection::new(maximize).select(fitness, num_to_select, rng)
            }
            SelectionMethod::Tournament => TournamentSelection::new(tournament_size, maximize)?
                .select(fitness, num_to_select, rng),
        }
    }
}

impl FromStr for SelectionMethod {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "best" => Ok(SelectionMethod::Best),
            "roulette" => Ok(SelectionMethod::Roulette),
            "tournament" => Ok(SelectionMethod::Tournament),
            other => Err(GeneticError::Configuration(format!(
                "Unknown selection method: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_method() {
        assert_eq!("best".parse::<SelectionMethod>().unwrap(), SelectionMethod::Best);
        assert_eq!(
            "roulette".parse::<SelectionMethod>().unwrap(),
            SelectionMethod::Roulette
        );
        assert_eq!(
            SelectionMethod::Tournament.to_string(),
            "tournament".to_string()
        );
        assert!(matches!(
            "rank".parse::<SelectionMethod>(),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_dispatch_returns_requested_count() {
        let fitness = vec![4.0, 1.0, 3.0, 2.0, 5.0, 0.5];
        let mut rng = RandomNumberGenerator::from_seed(8);

        for method in [
            SelectionMethod::Best,
            SelectionMethod::Roulette,
            SelectionMethod::Tournament,
        ] {
            for maximize in [true, false] {
                let selected = method.select(&fitness, 4, 3, maximize, &mut rng).unwrap();
                assert_eq!(selected.len(), 4);
            }
        }
    }

    #[test]
    fn test_dispatch_rejects_zero_tournament() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let result = SelectionMethod::Tournament.select(&[1.0, 2.0], 1, 0, true, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
