//! `rand`-backed random source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vqa_application::RandomSource;

/// [`RandomSource`] over [`StdRng`]
///
/// Seeded runs replay the same category, answer and confidence sequence.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seeded when `seed` is given, otherwise from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..=1.0)
    }
}
