//! Random-number source shared by the pool, the scheduler, and dispatch.
//!
//! The host owns one sequential generator and the director draws from it in
//! call order.  Run-to-run determinism is not a goal, but a seeded
//! [`SimRng`] makes single runs reproducible for tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The `RandomInt(lowInclusive, highExclusive)` collaborator.
///
/// Implement this over the host's generator to share its sequence; use
/// [`SimRng`] otherwise.
pub trait RandomSource {
    /// A uniformly distributed integer in `[low, high)`.
    ///
    /// An empty or inverted range yields `low`.
    fn random_int(&mut self, low: i64, high: i64) -> i64;

    /// A uniformly distributed index into a collection of length `len`.
    ///
    /// Returns `None` when `len == 0`.
    fn random_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = self.random_int(0, len as i64);
        Some((i.max(0) as usize).min(len - 1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        (**self).random_int(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        (**self).random_int(low, high)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Default [`RandomSource`] backed by `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Used when the host does not share a generator.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }
}
