//! Seed source abstraction for Verdict networks.

/// Exclusive upper bound for drawn seeds.
pub const SEED_BOUND: u64 = 1_000_000;

/// Supplier of node seeds.
///
/// A network calls [`EntropySource::draw_seed`] exactly once for every node
/// constructed without an explicit seed. The drawn value is stored on the node
/// and never drawn again, so the source only influences construction.
///
/// # Implementations
///
/// - **Production**: `OsEntropy` - uniform draws from OS randomness
/// - **Simulation**: `SeededEntropy` - ChaCha8 stream from a master seed
pub trait EntropySource {
    /// Draws a fresh seed in `0..SEED_BOUND`.
    fn draw_seed(&mut self) -> u64;

    /// Returns the source's own seed (for logging/debugging).
    ///
    /// In production, returns 0 (not seeded).
    /// In simulation, returns the master seed.
    fn seed(&self) -> u64;
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
    fn draw_seed(&mut self) -> u64 {
        (**self).draw_seed()
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }
}
