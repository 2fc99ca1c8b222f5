//! # Mutation
//!
//! Mutation operators flip genes of one chromosome in place.

use std::{fmt, str::FromStr};

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Mutation operators selectable from options.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationMethod {
    SinglePoint,
    TwoPoint,
    Boundary,
}

impl MutationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            MutationMethod::SinglePoint => "single_point",
            MutationMethod::TwoPoint => "two_point",
            MutationMethod::Boundary => "boundary",
        }
    }

    /// Shortest chromosome this operator accepts.
    pub fn min_length(&self) -> usize {
        match self {
            MutationMethod::SinglePoint | MutationMethod::Boundary => 1,
            MutationMethod::TwoPoint => 2,
        }
    }

    pub fn mutate(&self, chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) -> Result<()> {
        match self {
            MutationMethod::SinglePoint => single_point(chromosome, rng),
            MutationMethod::TwoPoint => two_point(chromosome, rng),
            MutationMethod::Boundary => boundary(chromosome, rng),
        }
    }
}

impl FromStr for MutationMethod {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single_point" => Ok(MutationMethod::SinglePoint),
            "two_point" => Ok(MutationMethod::TwoPoint),
            "boundary" => Ok(MutationMethod::Boundary),
            other => Err(GeneticError::Configuration(format!(
                "Unknown mutation method: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for MutationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_length(chromosome: &Chromosome, min_length: usize) -> Result<()> {
    if chromosome.len() < min_length {
        return Err(GeneticError::DegenerateInput(format!(
            "Mutation needs chromosomes of length >= {}, got {}",
            min_length,
            chromosome.len()
        )));
    }
    Ok(())
}

/// Flips one uniformly random gene.
pub fn single_point(chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) -> Result<()> {
    chromosome.mutate(rng)
}

/// Flips two distinct uniformly random genes.
pub fn two_point(chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) -> Result<()> {
    check_length(chromosome, MutationMethod::TwoPoint.min_length())?;

    for point in rng.sample_indices(chromosome.len(), 2) {
        chromosome.flip(point);
    }
    Ok(())
}

/// Flips either the first or the last gene, with equal probability.
pub fn boundary(chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) -> Result<()> {
    check_length(chromosome, MutationMethod::Boundary.min_length())?;

    let point = if rng.chance(0.5) {
        0
    } else {
        chromosome.len() - 1
    };
    chromosome.flip(point);
    Ok(())
}
