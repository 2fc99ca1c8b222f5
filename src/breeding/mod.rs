//! # Breeding
//!
//! Variation operators over chromosomes: crossover, mutation and inversion.
//! Each family is a closed enum dispatching to plain functions, all drawing
//! from the run's shared [`RandomNumberGenerator`](crate::rng::RandomNumberGenerator).
pub mod crossover;
pub mod inversion;
pub mod mutation;

pub use crossover::{CrossoverMethod, DEFAULT_GRANULARITY};
pub use inversion::{inversion, MIN_INVERSION_LENGTH};
pub use mutation::MutationMethod;
