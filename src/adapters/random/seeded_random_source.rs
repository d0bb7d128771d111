//! `StdRng`-backed random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Random source over `rand`'s standard generator.
///
/// # Example
/// ```ignore
/// // Reproducible pair order
/// let rng = SeededRandomSource::from_seed(42);
///
/// // Production
/// let rng = SeededRandomSource::from_entropy();
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// `Some` when constructed from an explicit seed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SeededRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandomSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}
