//! Seeded pseudo-random helpers.
//!
//! Every randomized step in the crate takes its generator as an explicit
//! `&mut R: Rng` argument. These helpers build the default generator and
//! provide the small sampling primitives the search components share.

use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Creates a fast, non-cryptographic generator from a seed.
///
/// Identical seeds always produce identical sequences.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_loadout::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Draws up to `amount` distinct elements of `pool` uniformly at random.
///
/// Returns all of `pool` (in random order) when `amount >= pool.len()`.
pub fn sample_indices<R: Rng>(pool: &[usize], amount: usize, rng: &mut R) -> Vec<usize> {
    let amount = amount.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}
