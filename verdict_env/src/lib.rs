//! Verdict Environment Abstraction Layer
//!
//! This crate isolates the two collaborators the simulation engine does not
//! own itself:
//! - **Entropy**: where a node's seed comes from when none is supplied
//! - **Progress**: who gets told about long generations
//!
//! Production code draws seeds from the operating system; simulations plug in
//! a seeded source so that every seedless node becomes reproducible from one
//! master seed.
//!
//! # Example
//!
//! ```
//! use verdict_env::{EntropySource, OsEntropy, SEED_BOUND};
//!
//! let mut entropy = OsEntropy::new();
//! let seed = entropy.draw_seed();
//! assert!(seed < SEED_BOUND);
//! ```

mod entropy;
mod progress;
mod os_impl;

pub use entropy::{EntropySource, SEED_BOUND};
pub use progress::{ProgressObserver, SilentProgress};
pub use os_impl::OsEntropy;
