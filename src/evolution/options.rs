//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the immutable configuration of one run:
//! the search domain and its binary encoding, population and epoch sizes, the
//! operators to apply and their probabilities.
//!
//! ## Example
//!
//! ```rust
//! use genalg_bits::evolution::options::EvolutionOptions;
//! use genalg_bits::evolution::fitness::BenchmarkFunction;
//! use genalg_bits::selection::SelectionMethod;
//!
//! let options = EvolutionOptions::builder()
//!     .fitness_function(BenchmarkFunction::Hypersphere)
//!     .bounds(-10.0, 10.0)
//!     .precision(0.1)
//!     .num_epochs(30)
//!     .selection_method(SelectionMethod::Best)
//!     .build()
//!     .unwrap();
//!
//! // ceil(log2(20 / 0.1)) = 8 bits for each of the 2 variables
//! assert_eq!(options.get_chromosome_length(), 16);
//!
//! // Defaults follow the classic benchmark setup
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 50);
//! ```
//!
//! ## Validation
//!
//! [`EvolutionOptionsBuilder::build`] and [`EvolutionOptions::validate`] reject
//! anything the engine cannot run: empty or inverted bounds, a precision too
//! coarse or too fine for the encoding, probabilities outside `[0, 1]`, a
//! selection count above the population size, and chromosomes too short for
//! the chosen operators.

use crate::{
    breeding::{CrossoverMethod, MutationMethod},
    error::{GeneticError, Result},
    evolution::fitness::BenchmarkFunction,
    selection::SelectionMethod,
};

/// Widest segment a variable can be encoded into.
pub const MAX_SEGMENT_LENGTH: usize = 63;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    fitness_function: BenchmarkFunction,
    lower_bound: f64,
    upper_bound: f64,
    precision: f64,
    num_variables: usize,
    population_size: usize,
    num_epochs: usize,
    elite_count: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    inversion_probability: f64,
    selection_method: SelectionMethod,
    /// Individuals kept by selection; half of the population when unset.
    select_count: Option<usize>,
    tournament_size: usize,
    crossover_method: CrossoverMethod,
    mutation_method: MutationMethod,
    maximization: bool,
}

impl EvolutionOptions {
    /// Returns a builder starting from the default options.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    pub fn get_fitness_function(&self) -> BenchmarkFunction {
        self.fitness_function
    }

    pub fn get_lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn get_upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn get_precision(&self) -> f64 {
        self.precision
    }

    pub fn get_num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_epochs(&self) -> usize {
        self.num_epochs
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_inversion_probability(&self) -> f64 {
        self.inversion_probability
    }

    pub fn get_selection_method(&self) -> SelectionMethod {
        self.selection_method
    }

    pub fn get_select_count(&self) -> Option<usize> {
        self.select_count
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_crossover_method(&self) -> CrossoverMethod {
        self.crossover_method
    }

    pub fn get_mutation_method(&self) -> MutationMethod {
        self.mutation_method
    }

    pub fn is_maximization(&self) -> bool {
        self.maximization
    }

    /// Bits per variable: `ceil(log2((upper - lower) / precision))`.
    ///
    /// Meaningful only for validated options.
    pub fn get_segment_length(&self) -> usize {
        self.raw_segment_length().max(0.0) as usize
    }

    /// Total genes per chromosome: `num_variables * segment_length`.
    pub fn get_chromosome_length(&self) -> usize {
        self.num_variables * self.get_segment_length()
    }

    fn raw_segment_length(&self) -> f64 {
        ((self.upper_bound - self.lower_bound) / self.precision)
            .log2()
            .ceil()
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(config_error("Bounds must be finite"));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(config_error(format!(
                "Lower bound ({}) must be below upper bound ({})",
                self.lower_bound, self.upper_bound
            )));
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(config_error("Precision must be a positive number"));
        }

        let segment = self.raw_segment_length();
        if !(segment >= 1.0 && segment <= MAX_SEGMENT_LENGTH as f64) {
            return Err(config_error(format!(
                "Precision {} over [{}, {}] needs {} bits per variable; expected 1 to {}",
                self.precision, self.lower_bound, self.upper_bound, segment, MAX_SEGMENT_LENGTH
            )));
        }

        if self.num_variables == 0 {
            return Err(config_error("Number of variables cannot be zero"));
        }
        if self.population_size < 2 {
            return Err(config_error("Population size must be at least 2"));
        }

        for (name, probability) in [
            ("Crossover", self.crossover_probability),
            ("Mutation", self.mutation_probability),
            ("Inversion", self.inversion_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(config_error(format!(
                    "{} probability must be within [0, 1], got {}",
                    name, probability
                )));
            }
        }

        if self.tournament_size == 0 {
            return Err(config_error("Tournament size must be at least 1"));
        }
        if let Some(count) = self.select_count {
            if count < 2 || count > self.population_size {
                return Err(config_error(format!(
                    "Selection count {} must be within [2, {}]",
                    count, self.population_size
                )));
            }
        }
        if self.elite_count > self.population_size {
            return Err(config_error(format!(
                "Elite count {} exceeds population size {}",
                self.elite_count, self.population_size
            )));
        }

        let length = self.get_chromosome_length();
        if length < self.crossover_method.min_length() {
            return Err(config_error(format!(
                "{} crossover needs at least {} genes, chromosome has {}",
                self.crossover_method,
                self.crossover_method.min_length(),
                length
            )));
        }
        if length < self.mutation_method.min_length() {
            return Err(config_error(format!(
                "{} mutation needs at least {} genes, chromosome has {}",
                self.mutation_method,
                self.mutation_method.min_length(),
                length
            )));
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> GeneticError {
    GeneticError::Configuration(message.into())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            fitness_function: BenchmarkFunction::Hyperellipsoid,
            lower_bound: -65.536,
            upper_bound: 65.536,
            precision: 0.001,
            num_variables: 2,
            population_size: 50,
            num_epochs: 100,
            elite_count: 2,
            crossover_probability: 0.8,
            mutation_probability: 0.03,
            inversion_probability: 0.1,
            selection_method: SelectionMethod::Tournament,
            select_count: Some(10),
            tournament_size: 5,
            crossover_method: CrossoverMethod::SinglePoint,
            mutation_method: MutationMethod::SinglePoint,
            maximization: false,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields keep their default values.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    options: EvolutionOptions,
}

impl EvolutionOptionsBuilder {
    pub fn fitness_function(mut self, value: BenchmarkFunction) -> Self {
        self.options.fitness_function = value;
        self
    }

    /// Sets the search domain of every variable.
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.options.lower_bound = lower;
        self.options.upper_bound = upper;
        self
    }

    pub fn precision(mut self, value: f64) -> Self {
        self.options.precision = value;
        self
    }

    pub fn num_variables(mut self, value: usize) -> Self {
        self.options.num_variables = value;
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.options.population_size = value;
        self
    }

    pub fn num_epochs(mut self, value: usize) -> Self {
        self.options.num_epochs = value;
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.options.elite_count = value;
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.options.crossover_probability = value;
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.options.mutation_probability = value;
        self
    }

    pub fn inversion_probability(mut self, value: f64) -> Self {
        self.options.inversion_probability = value;
        self
    }

    pub fn selection_method(mut self, value: SelectionMethod) -> Self {
        self.options.selection_method = value;
        self
    }

    /// Sets how many individuals selection keeps; `None` keeps half.
    pub fn select_count(mut self, value: Option<usize>) -> Self {
        self.options.select_count = value;
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.options.tournament_size = value;
        self
    }

    pub fn crossover_method(mut self, value: CrossoverMethod) -> Self {
        self.options.crossover_method = value;
        self
    }

    pub fn mutation_method(mut self, value: MutationMethod) -> Self {
        self.options.mutation_method = value;
        self
    }

    pub fn maximization(mut self, value: bool) -> Self {
        self.options.maximization = value;
        self
    }

    /// Validates and builds the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = EvolutionOptions::default();
        assert!(options.validate().is_ok());
        // ceil(log2(131.072 / 0.001)) = 17
        assert_eq!(options.get_segment_length(), 17);
        assert_eq!(options.get_chromosome_length(), 34);
    }

    #[test]
    fn test_builder_overrides() {
        let options = EvolutionOptions::builder()
            .num_variables(3)
            .population_size(20)
            .select_count(None)
            .maximization(true)
            .build()
            .unwrap();

        assert_eq!(options.get_num_variables(), 3);
        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_select_count(), None);
        assert!(options.is_maximization());
        assert_eq!(options.get_num_epochs(), 100);
    }

    #[test]
    fn test_invalid_bounds() {
        let result = EvolutionOptions::builder().bounds(1.0, 1.0).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionOptions::builder().bounds(f64::NEG_INFINITY, 1.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_precision_limits() {
        // Range equal to the precision leaves zero bits
        let result = EvolutionOptions::builder()
            .bounds(0.0, 1.0)
            .precision(1.0)
            .build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionOptions::builder().precision(0.0).build();
        assert!(result.is_err());

        let result = EvolutionOptions::builder().precision(1e-30).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_select_count_limits() {
        let result = EvolutionOptions::builder()
            .population_size(10)
            .select_count(Some(11))
            .build();
        assert!(matches!(result, Err(GeneticError::Configuration(msg)) if msg.contains("Selection count")));

        let result = EvolutionOptions::builder().select_count(Some(1)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_probability_limits() {
        assert!(EvolutionOptions::builder()
            .mutation_probability(1.5)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .crossover_probability(-0.1)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .inversion_probability(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn test_operator_length_requirements() {
        // One variable of 2 bits: ceil(log2(4 / 1)) = 2
        let short = EvolutionOptions::builder()
            .num_variables(1)
            .bounds(0.0, 4.0)
            .precision(1.0);

        assert!(short
            .clone()
            .crossover_method(CrossoverMethod::SinglePoint)
            .build()
            .is_err());
        assert!(short
            .clone()
            .crossover_method(CrossoverMethod::Uniform)
            .mutation_method(MutationMethod::TwoPoint)
            .build()
            .is_ok());
    }

    #[test]
    fn test_population_and_elite_limits() {
        assert!(EvolutionOptions::builder().population_size(1).build().is_err());
        assert!(EvolutionOptions::builder()
            .population_size(5)
            .select_count(Some(5))
            .elite_count(6)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder().tournament_size(0).build().is_err());
        assert!(EvolutionOptions::builder().num_variables(0).build().is_err());
    }
}
