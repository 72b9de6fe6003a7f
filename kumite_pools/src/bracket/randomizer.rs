//! Randomizers used to permute competitors before partitioning.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Uniform permutation capability injected into a partition session
pub trait Randomizer {
    /// Shuffle `items` in place
    fn permute<T>(&mut self, items: &mut [T]);
}

/// Randomizer backed by the thread-local generator
pub struct ThreadRandomizer {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRandomizer {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for ThreadRandomizer {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Reproducible randomizer for replays and tests
pub struct SeededRandomizer {
    rng: StdRng,
}

impl SeededRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Randomizer for SeededRandomizer {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
