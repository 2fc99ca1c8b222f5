//! # FitnessFunction
//!
//! The objective the engine optimizes. Any `Fn(&[f64]) -> f64` closure is a
//! fitness function; [`BenchmarkFunction`] provides the named test functions
//! that options can refer to by identifier.

use std::{fmt, str::FromStr};

use crate::error::GeneticError;

/// Scores a decoded real vector.
///
/// Called once per individual per epoch with freshly decoded variables.
pub trait FitnessFunction {
    fn evaluate(&self, variables: &[f64]) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, variables: &[f64]) -> f64 {
        self(variables)
    }
}

/// Named benchmark objectives selectable from options.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkFunction {
    /// Sum of squares.
    Hypersphere,
    /// Rotated hyper-ellipsoid: sum over i of the prefix sums of squares.
    Hyperellipsoid,
    /// Rosenbrock's valley.
    Rosenbrock,
}

impl BenchmarkFunction {
    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkFunction::Hypersphere => "hypersphere",
            BenchmarkFunction::Hyperellipsoid => "hyperellipsoid",
            BenchmarkFunction::Rosenbrock => "rosenbrock",
        }
    }
}

impl FitnessFunction for BenchmarkFunction {
    fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            BenchmarkFunction::Hypersphere => x.iter().map(|xi| xi * xi).sum(),
            BenchmarkFunction::Hyperellipsoid => x
                .iter()
                .scan(0.0, |prefix, xi| {
                    *prefix += xi * xi;
                    Some(*prefix)
                })
                .sum(),
            BenchmarkFunction::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum(),
        }
    }
}

impl FromStr for BenchmarkFunction {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hypersphere" => Ok(BenchmarkFunction::Hypersphere),
            "hyperellipsoid" => Ok(BenchmarkFunction::Hyperellipsoid),
            "rosenbrock" => Ok(BenchmarkFunction::Rosenbrock),
            other => Err(GeneticError::Configuration(format!(
                "Unknown fitness function: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for BenchmarkFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
