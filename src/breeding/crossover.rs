//! # Crossover
//!
//! Crossover operators take two parents of equal length and produce two
//! children of that same length. Every gene of a child is copied from the
//! same position of one of the parents; no operator invents gene values.

use std::{fmt, str::FromStr};

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Block size used by granular crossover.
pub const DEFAULT_GRANULARITY: usize = 5;

/// Crossover operators selectable from options.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossoverMethod {
    SinglePoint,
    TwoPoint,
    Uniform,
    Granular,
}

impl CrossoverMethod {
    pub fn name(&self) -> &'static str {
        match self {
            CrossoverMethod::SinglePoint => "single_point",
            CrossoverMethod::TwoPoint => "two_point",
            CrossoverMethod::Uniform => "uniform",
            CrossoverMethod::Granular => "granular",
        }
    }

    /// Shortest chromosome this operator accepts.
    pub fn min_length(&self) -> usize {
        match self {
            CrossoverMethod::SinglePoint => 3,
            CrossoverMethod::TwoPoint => 4,
            CrossoverMethod::Uniform | CrossoverMethod::Granular => 1,
        }
    }

    pub fn crossover(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        match self {
            CrossoverMethod::SinglePoint => single_point(first, second, rng),
            CrossoverMethod::TwoPoint => two_point(first, second, rng),
            CrossoverMethod::Uniform => uniform(first, second, rng),
            CrossoverMethod::Granular => granular(first, second, DEFAULT_GRANULARITY, rng),
        }
    }
}

impl FromStr for CrossoverMethod {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single_point" => Ok(CrossoverMethod::SinglePoint),
            "two_point" => Ok(CrossoverMethod::TwoPoint),
            "uniform" => Ok(CrossoverMethod::Uniform),
            "granular" => Ok(CrossoverMethod::Granular),
            other => Err(GeneticError::Configuration(format!(
                "Unknown crossover method: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_parents(first: &Chromosome, second: &Chromosome, min_length: usize) -> Result<()> {
    if first.len() != second.len() {
        return Err(GeneticError::Breeding(format!(
            "Parent lengths differ ({} vs {})",
            first.len(),
            second.len()
        )));
    }
    if first.len() < min_length {
        return Err(GeneticError::DegenerateInput(format!(
            "Crossover needs chromosomes of length >= {}, got {}",
            min_length,
            first.len()
        )));
    }
    Ok(())
}

/// Splices the parents crosswise at one point drawn from `[1, L-1)`.
pub fn single_point(
    first: &Chromosome,
    second: &Chromosome,
    rng: &mut RandomNumberGenerator,
) -> Result<(Chromosome, Chromosome)> {
    check_parents(first, second, CrossoverMethod::SinglePoint.min_length())?;

    let point = rng.gen_index(1, first.len() - 1);
    first.crossover(second, point)
}

/// Swaps the segment between two distinct sorted points drawn from `[1, L-1)`.
pub fn two_point(
    first: &Chromosome,
    second: &Chromosome,
    rng: &mut RandomNumberGenerator,
) -> Result<(Chromosome, Chromosome)> {
    check_parents(first, second, CrossoverMethod::TwoPoint.min_length())?;

    let mut points = rng.sample_indices(first.len() - 2, 2);
    points.sort_unstable();
    let (from, to) = (points[0] + 1, points[1] + 1);

    let mut child_a = first.genes().to_vec();
    let mut child_b = second.genes().to_vec();
    child_a[from..to].copy_from_slice(&second.genes()[from..to]);
    child_b[from..to].copy_from_slice(&first.genes()[from..to]);

    Ok((Chromosome::from_genes(child_a), Chromosome::from_genes(child_b)))
}

/// Picks the source parent of every position with a fair coin.
pub fn uniform(
    first: &Chromosome,
    second: &Chromosome,
    rng: &mut RandomNumberGenerator,
) -> Result<(Chromosome, Chromosome)> {
    check_parents(first, second, CrossoverMethod::Uniform.min_length())?;

    let mask = rng.fetch_bits(first.len());
    let (child_a, child_b): (Vec<bool>, Vec<bool>) = mask
        .iter()
        .zip(first.genes().iter().zip(second.genes()))
        .map(|(&keep, (&a, &b))| if keep { (a, b) } else { (b, a) })
        .unzip();

    Ok((Chromosome::from_genes(child_a), Chromosome::from_genes(child_b)))
}

/// Cuts the parents into contiguous blocks of `granularity` genes (the last
/// block may be shorter) and swaps each block with a fair coin.
pub fn granular(
    first: &Chromosome,
    second: &Chromosome,
    granularity: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<(Chromosome, Chromosome)> {
    check_parents(first, second, CrossoverMethod::Granular.min_length())?;
    if granularity == 0 {
        return Err(GeneticError::Configuration(
            "Granularity must be at least 1".to_string(),
        ));
    }

    let mut child_a = Vec::with_capacity(first.len());
    let mut child_b = Vec::with_capacity(second.len());

    for (block_a, block_b) in first
        .genes()
        .chunks(granularity)
        .zip(second.genes().chunks(granularity))
    {
        if rng.chance(0.5) {
            child_a.extend_from_slice(block_a);
            child_b.extend_from_slice(block_b);
        } else {
            child_a.extend_from_slice(block_b);
            child_b.extend_from_slice(block_a);
        }
    }

    Ok((Chromosome::from_genes(child_a), Chromosome::from_genes(child_b)))
}
