//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Configuration problems are reported when options are built or when the
//! launcher is constructed; operators report undersized chromosomes; a fitness
//! function that yields a non-finite value aborts the run.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genalg_bits::error::{GeneticError, Result};
//!
//! fn check_bounds(lower: f64, upper: f64) -> Result<()> {
//!     if lower >= upper {
//!         return Err(GeneticError::Configuration(
//!             "Lower bound must be below upper bound".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_bounds(-1.0, 1.0).is_ok());
//! assert!(check_bounds(1.0, -1.0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genalg_bits::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> genalg_bits::error::Result<f64> {
//!     scores
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[3.0, 1.0]).unwrap(), 1.0);
//! assert!(best_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A crossover was requested between chromosomes of different lengths.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// The evolution loop was driven in a way its state does not allow.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Invalid options, an unknown operator or fitness identifier, or a
    /// selection count larger than the population.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operator received a chromosome shorter than it needs.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The fitness function produced a value that cannot be ranked.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
