//! Production implementation of EntropySource using OS randomness.

use crate::entropy::{EntropySource, SEED_BOUND};
use rand::rngs::OsRng;
use rand::Rng;

/// Production seed source backed by OS entropy.
///
/// Every call draws a new uniform seed, so two networks built from seedless
/// specs will almost surely differ.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a new OsEntropy.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn draw_seed(&mut self) -> u64 {
        OsRng.gen_range(0..SEED_BOUND)
    }

    fn seed(&self) -> u64 {
        // Production is not seeded
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{ProgressObserver, SilentProgress};

    #[test]
    fn test_os_entropy_range() {
        let mut entropy = OsEntropy::new();
        for _ in 0..1000 {
            assert!(entropy.draw_seed() < SEED_BOUND);
        }
    }

    #[test]
    fn test_os_entropy_varies() {
        let mut entropy = OsEntropy::new();
        let draws: Vec<u64> = (0..16).map(|_| entropy.draw_seed()).collect();

        // 16 identical draws out of a million values would mean a broken source
        assert!(draws.iter().any(|&d| d != draws[0]));
    }

    #[test]
    fn test_os_entropy_seed() {
        let entropy = OsEntropy::new();
        assert_eq!(entropy.seed(), 0);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut entropy: Box<dyn EntropySource> = Box::new(OsEntropy::new());
        assert!(entropy.draw_seed() < SEED_BOUND);
        assert_eq!(entropy.seed(), 0);
    }

    fn drive<P: ProgressObserver>(mut observer: P) {
        observer.begin("node", 2);
        observer.advance("node", 0);
        observer.advance("node", 1);
        observer.finish("node");
    }

    #[test]
    fn test_silent_progress_through_reference() {
        let mut silent = SilentProgress;
        drive(&mut silent);
        drive(silent);
    }
}
