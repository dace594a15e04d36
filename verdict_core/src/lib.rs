//! Verdict Core - Correlated Decision-Maker Networks
//!
//! Simulates named decision-makers ("ground truth", "AI predictor", "human
//! judge", ...) whose predictions are drawn at random but pulled toward the
//! predictions of the nodes they correlate with:
//! 1. **Odds aggregation**: correlate signals shift the odds of each decision
//! 2. **Two variants**: binary decisions, or ternary with an undecided class
//! 3. **Reproducibility**: each node regenerates the same sequence from its seed
//! 4. **Memoization**: sequences and distributions are cached per length
//!
//! # Example
//!
//! ```
//! use verdict_core::{agreement, BinaryNetwork, NodeSpec};
//!
//! let mut net = BinaryNetwork::new();
//! net.create(NodeSpec::new("truth").seed(1))?;
//! net.create(NodeSpec::new("ai").correlate("truth", 1.0).seed(2))?;
//!
//! let truth = net.predict("truth", 1000)?;
//! let ai = net.predict("ai", 1000)?;
//! assert!(agreement(&truth, &ai).match_rate > 0.5);
//! # Ok::<(), verdict_core::NetworkError>(())
//! ```

pub mod agreement;
pub mod cache;
pub mod error;
pub mod network;
pub mod node;
pub mod outcome;
pub mod probability;
pub mod registry;
pub mod variant;

// Re-export key types for convenience
pub use agreement::{agreement, Agreement};
pub use cache::{CacheKey, CacheStats, PredictionCache};
pub use error::{ErrorKind, NetworkError};
pub use network::{BinaryNetwork, Network, TernaryNetwork, MAX_CORRELATION_DEPTH};
pub use node::{Node, NodeSpec};
pub use outcome::{Decided, Outcome, TernaryOutcome};
pub use probability::TernaryDistribution;
pub use registry::Registry;
pub use variant::{Binary, Ternary, Variant};
