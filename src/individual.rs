//! # Individual
//!
//! An `Individual` owns one [`Chromosome`] and caches the fitness computed
//! for its decoded variables. The cache is unset until the individual is
//! evaluated and goes stale whenever the chromosome is mutated, so the
//! population re-evaluates every epoch.

use std::fmt;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::fitness::FitnessFunction,
};

/// A chromosome plus its cached fitness value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: Option<f64>,
}

impl Individual {
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: None,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn chromosome_mut(&mut self) -> &mut Chromosome {
        &mut self.chromosome
    }

    /// The cached fitness, `None` until [`Individual::evaluate`] runs.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Splits the genes into `num_variables` equal segments, reads each as an
    /// unsigned big-endian integer and rescales it linearly into
    /// `[lower, upper]`.
    ///
    /// The all-zero segment maps to exactly `lower` and the all-one segment to
    /// exactly `upper`.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when `num_variables` is zero or does not divide
    /// the chromosome length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genalg_bits::{chromosome::Chromosome, individual::Individual};
    ///
    /// // "0000" and "1111"
    /// let individual = Individual::new(Chromosome::from_number(0b0000_1111, 8).unwrap());
    /// let decoded = individual.decode(2, -1.0, 1.0).unwrap();
    /// assert_eq!(decoded, vec![-1.0, 1.0]);
    /// ```
    pub fn decode(&self, num_variables: usize, lower: f64, upper: f64) -> Result<Vec<f64>> {
        let length = self.chromosome.len();
        if num_variables == 0 || length % num_variables != 0 {
            return Err(GeneticError::Configuration(format!(
                "Chromosome length {} is not divisible into {} variables",
                length, num_variables
            )));
        }

        let segment_length = length / num_variables;
        let max_value = 2f64.powi(segment_length as i32) - 1.0;

        Ok(self
            .chromosome
            .genes()
            .chunks(segment_length)
            .map(|segment| {
                let total = segment
                    .iter()
                    .fold(0.0, |acc, &gene| acc * 2.0 + if gene { 1.0 } else { 0.0 });
                let t = total / max_value;
                (1.0 - t) * lower + t * upper
            })
            .collect())
    }

    /// Decodes the chromosome, scores it with `fitness_function` and caches
    /// the result.
    ///
    /// # Errors
    ///
    /// Propagates decode errors and returns `FitnessCalculation` when the
    /// score is NaN or infinite.
    pub fn evaluate<F>(
        &mut self,
        fitness_function: &F,
        num_variables: usize,
        lower: f64,
        upper: f64,
    ) -> Result<f64>
    where
        F: FitnessFunction + ?Sized,
    {
        let variables = self.decode(num_variables, lower, upper)?;
        let score = fitness_function.evaluate(&variables);

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {} for variables {:?}",
                score, variables
            )));
        }

        self.fitness = Some(score);
        Ok(score)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fitness {
            Some(fitness) => write!(
                f,
                "Individual(Chromosome: {}, Fitness: {})",
                self.chromosome, fitness
            ),
            None => write!(f, "Individual(Chromosome: {}, Fitness: None)", self.chromosome),
        }
    }
}
