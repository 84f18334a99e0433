// Random selections ("quick pick").
//
// Reproducible runs seed a ChaCha8 generator; otherwise it is seeded from
// OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use marksix_core::number::{MAX_NUMBER, MIN_NUMBER};

use crate::registry::CombinationType;

/// Deterministic generator for a given seed. Same seed, same picks.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Draw `ty.input_count()` distinct numbers uniformly from 1..=49.
///
/// The numbers come back in the order drawn; `generate` sorts them.
pub fn random_selection<R: Rng + ?Sized>(ty: &CombinationType, rng: &mut R) -> Vec<u32> {
    let pool = (MAX_NUMBER - MIN_NUMBER + 1) as usize;
    rand::seq::index::sample(rng, pool, ty.input_count())
        .into_iter()
        .map(|i| i as u32 + MIN_NUMBER)
        .collect()
}
