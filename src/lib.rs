pub mod breeding;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, FitnessFunction, ProgressRow};
