//! Deterministic RNG wrapper using PCG32.
//!
//! Every recipe constructs its own [`DeterministicRng`] from its seed and
//! threads it through each noise and pattern call, so there is no
//! process-wide random state and recipes can run side by side.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Seed for the material at `index` in generation order.
    ///
    /// Offsets are plain additions so that `--seed 42` maps to 42, 43, 44...
    pub fn material_seed(base_seed: u32, index: u32) -> u32 {
        base_seed.wrapping_add(index)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random f64 in the range [lo, hi).
    #[inline]
    pub fn gen_uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.gen_f64() * (hi - lo)
    }

    /// Generate a random integer in the half-open range [lo, hi).
    ///
    /// Returns `lo` when the range is empty.
    #[inline]
    pub fn gen_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }
}
