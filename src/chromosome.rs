//! # Chromosome
//!
//! A `Chromosome` is a fixed-length vector of boolean genes. Its length is set
//! when it is created and never changes: mutation flips genes in place and
//! crossover always produces children as long as their parents.
//!
//! ## Example
//!
//! ```rust
//! use genalg_bits::chromosome::Chromosome;
//!
//! let chromosome = Chromosome::from_number(5, 4).unwrap();
//! assert_eq!(chromosome.to_string(), "0101");
//!
//! let (left, right) = chromosome
//!     .crossover(&Chromosome::from_number(10, 4).unwrap(), 2)
//!     .unwrap();
//! assert_eq!(left.to_string(), "0110");
//! assert_eq!(right.to_string(), "1001");
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// A fixed-length bit-vector encoding one candidate solution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome of `length` independent uniform bits.
    pub fn random(length: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: rng.fetch_bits(length),
        }
    }

    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Encodes `number` as big-endian binary, zero padded to `length` genes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericValue` when `number` needs more than `length`
    /// bits; the chromosome is never widened or truncated.
    pub fn from_number(number: u64, length: usize) -> Result<Self> {
        let needed = (u64::BITS - number.leading_zeros()) as usize;
        if needed > length {
            return Err(GeneticError::InvalidNumericValue(format!(
                "{} needs {} genes, chromosome has {}",
                number, needed, length
            )));
        }

        let genes = (0..length)
            .rev()
            .map(|shift| shift < 64 && (number >> shift) & 1 == 1)
            .collect();
        Ok(Self { genes })
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Flips the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Flips one uniformly chosen gene.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` for an empty chromosome.
    pub fn mutate(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        if self.genes.is_empty() {
            return Err(GeneticError::DegenerateInput(
                "Cannot mutate an empty chromosome".to_string(),
            ));
        }
        let point = rng.gen_index(0, self.genes.len());
        self.flip(point);
        Ok(())
    }

    /// One-point crossover at `point`: the first child takes `self` up to
    /// `point` and `other` after it, the second child the reverse.
    ///
    /// # Errors
    ///
    /// Returns `Breeding` when the parents differ in length and
    /// `DegenerateInput` when `point` lies past the end.
    pub fn crossover(&self, other: &Self, point: usize) -> Result<(Self, Self)> {
        if self.len() != other.len() {
            return Err(GeneticError::Breeding(format!(
                "Parent lengths differ ({} vs {})",
                self.len(),
                other.len()
            )));
        }
        if point > self.len() {
            return Err(GeneticError::DegenerateInput(format!(
                "Crossover point {} exceeds chromosome length {}",
                point,
                self.len()
            )));
        }

        let (head_a, tail_a) = self.genes.split_at(point);
        let (head_b, tail_b) = other.genes.split_at(point);

        Ok((
            Self::from_genes([head_a, tail_b].concat()),
            Self::from_genes([head_b, tail_a].concat()),
        ))
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}
