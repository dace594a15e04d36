//! Seeded entropy implementing EntropySource for deterministic runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use verdict_env::{EntropySource, SEED_BOUND};

/// Seed source backed by a ChaCha8 stream.
///
/// Every seedless node of a network built with this source gets its seed
/// from one master seed, so a whole run is reproducible from that number.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    /// Master seed for this stream
    seed: u64,

    /// Deterministic RNG for node seeds
    rng: ChaCha8Rng,
}

impl SeededEntropy {
    /// Creates a new SeededEntropy with the given master seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates an independent stream for one scenario of a run.
    ///
    /// Adding or reordering scenarios does not shift the seeds handed to
    /// the nodes of the others.
    pub fn for_stream(master_seed: u64, stream: u64) -> Self {
        let combined = master_seed
            .wrapping_mul(0x9e3779b97f4a7c15)
            .wrapping_add(stream.wrapping_mul(0x517cc1b727220a95));
        Self::new(combined)
    }
}

impl EntropySource for SeededEntropy {
    fn draw_seed(&mut self) -> u64 {
        self.rng.gen_range(0..SEED_BOUND)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
