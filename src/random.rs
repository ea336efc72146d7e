//! Random key generation for exercising trees.
//!
//! The random source is always passed in, so seeded generators give reproducible trees.

use alloc::vec::Vec;
use rand::{Rng, distr::uniform::SampleUniform};

/// Draws `len` keys uniformly from `0..bound`. Duplicates are kept; trees drop them on construction.
///
/// # Panics
/// Panics if `len` is not zero and `bound` is zero or below, since the range would be empty.
pub fn random_keys<T, R>(rng: &mut R, len: usize, bound: T) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Default + Copy,
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.random_range(T::default()..bound)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn keys_stay_below_bound() {
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        let keys = random_keys(&mut rng, 500, 100_u32);
        assert_eq!(keys.len(), 500);
        assert!(keys.iter().all(|&key| key < 100));
    }

    #[test]
    fn seeded_sources_repeat() {
        let first = random_keys(&mut Pcg64::seed_from_u64(7), 15, 100_u8);
        let second = random_keys(&mut Pcg64::seed_from_u64(7), 15, 100_u8);
        assert_eq!(first, second);
    }

    #[test]
    fn nothing_requested() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(random_keys(&mut rng, 0, 10_i64).is_empty());
    }
}
