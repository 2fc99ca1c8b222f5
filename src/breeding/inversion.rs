use tracing::warn;

use crate::{chromosome::Chromosome, rng::RandomNumberGenerator};

/// Shortest chromosome inversion touches.
pub const MIN_INVERSION_LENGTH: usize = 3;

/// Reverses the genes between two distinct interior cut points
/// `1 <= a < b <= L-1`; genes outside `[a, b)` stay put.
///
/// Chromosomes shorter than [`MIN_INVERSION_LENGTH`] are left untouched and
/// `false` is returned.
pub fn inversion(chromosome: &mut Chromosome, rng: &mut RandomNumberGenerator) -> bool {
    let length = chromosome.len();
    if length < MIN_INVERSION_LENGTH {
        warn!(length, "chromosome too short to invert");
        return false;
    }

    let mut cuts = rng.sample_indices(length - 1, 2);
    cuts.sort_unstable();
    let (from, to) = (cuts[0] + 1, cuts[1] + 1);

    chromosome.genes_mut()[from..to].reverse();
    true
}
