//! Random source construction and the shared shuffling primitive.
//!
//! Every optimizer invocation owns exactly one generator and threads it
//! through all of its draws (shuffles, breed/mutate decisions, mutation
//! positions). Seeding that generator makes a whole run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator type owned by an optimizer invocation.
pub type OptimizerRng = StdRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> OptimizerRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when
/// `None`.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> OptimizerRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Perturbs `ordering` with exactly `n` random position swaps.
///
/// Each swap draws two indices independently and uniformly from `0..n`
/// (with replacement) and exchanges them; a swap whose indices coincide
/// does nothing. This is a fixed-iteration perturbation, not a uniform
/// permutation generator: not every permutation is equally likely.
///
/// # Complexity
/// O(n)
pub fn swap_shuffle<T, R: Rng>(ordering: &mut [T], rng: &mut R) {
    let n = ordering.len();
    for _ in 0..n {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a != b {
            ordering.swap(a, b);
        }
    }
}
