//! Seedable random source for bot decisions
//!
//! Each controller owns one of these so a fixed seed reproduces a bot's
//! every roll. When a seed is provided (e.g. via the headless config), the
//! same seed always produces the same duel. Without a seed, system entropy
//! is used.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct BotRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic).
    pub seed: Option<u64>,
}

impl BotRng {
    /// Create a seeded RNG for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a non-deterministic RNG from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Roll against a probability in `0.0..=1.0`. Out-of-range inputs are
    /// treated as never/always rather than panicking mid-tick.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.rng.gen_bool(probability)
        }
    }

    /// Roll against a whole-percent chance.
    pub fn percent(&mut self, pct: u32) -> bool {
        self.rng.gen_range(0..100) < pct
    }

    /// Uniform value in `lo..hi`; collapses to `lo` when the range is empty.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi {
            lo
        } else {
            self.rng.gen_range(lo..hi)
        }
    }

    /// Uniform value in `lo..=hi`; collapses to `lo` when the range is empty.
    pub fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            lo
        } else {
            self.rng.gen_range(lo..=hi)
        }
    }

    /// Uniform index in `0..n`.
    pub fn index(&mut self, n: usize) -> usize {
        if n <= 1 {
            0
        } else {
            self.rng.gen_range(0..n)
        }
    }

    /// Random sign, `1.0` or `-1.0`.
    pub fn sign(&mut self) -> f32 {
        if self.rng.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for BotRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
