//! The simulation's single random source.
//!
//! Every random draw of a run (graph edges, sexes, the shared sentence,
//! outbreak selection, activation order, infection trials) comes from one
//! `SimRng` seeded once at construction and never reseeded.  Because the
//! run is single-threaded the draw sequence, and therefore the whole time
//! series, is a pure function of the seed and the parameters.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose `amount` distinct indices from `0..length` uniformly without
    /// replacement.  `amount` is clamped to `length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount.min(length)).into_vec()
    }
}
