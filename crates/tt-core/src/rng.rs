//! Seedable RNG for subject ordering.
//!
//! # Per-variant streams
//!
//! A run owns one root `ShuffleRng`.  Each timetable variant shuffles with its
//! own child stream seeded by:
//!
//!   seed = root.next_u64() XOR (variant * MIXING_CONSTANT)
//!
//! Multiplying by 2^64/φ spreads consecutive variant numbers across the
//! seed space, so:
//!
//! - Variants never share RNG state; each draw is an independent shuffle.
//! - A fixed root seed reproduces every variant exactly (used by tests).
//! - Without a seed the root comes from OS entropy, so repeated actions give
//!   fresh orderings.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 2^64 / φ, rounded to odd.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Shuffle RNG used by the timetable assembler.
///
/// Used only in single-threaded contexts.
pub struct ShuffleRng(SmallRng);

impl ShuffleRng {
    pub fn new(seed: u64) -> Self {
        ShuffleRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        ShuffleRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, otherwise from entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Derive a child `ShuffleRng` with a different seed offset — one per
    /// timetable variant.
    pub fn child(&mut self, offset: u64) -> ShuffleRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        ShuffleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates, uniform permutation).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
