use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers. Swappable for testing.
pub trait RandomSource: Send {
    /// Draw an integer in `[low, high]`, both inclusive. Returns `low` when `high <= low`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        rand::rng().random_range(low..=high)
    }
}

/// Reproducible generator seeded once at construction.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}
