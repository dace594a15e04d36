//! Verdict scenario simulator
//!
//! Runs correlated decision-maker networks under a single master seed and
//! checks that the resulting sequences behave as the odds model predicts.
//!
//! # Determinism
//!
//! Node seeds are drawn from a [`SeededEntropy`] stream derived from the
//! master seed and the scenario, so the same seed reproduces every sequence
//! of a run. Scenarios use separate streams and do not affect each other.
//!
//! # Usage
//!
//! ```
//! use verdict_sim::ScenarioRunner;
//! use verdict_sim::scenarios::ScenarioId;
//!
//! let runner = ScenarioRunner::new(42).with_length(200);
//! let result = runner.run(ScenarioId::CycleGuard);
//! assert!(result.passed);
//! ```
//!
//! Networks can also be loaded from JSON definitions, see
//! [`NetworkDefinition`].

mod config;
mod context;
mod error;
mod exporter;
mod progress;
mod runner;
pub mod scenarios;

pub use config::{NetworkDefinition, SimConfig, VariantKind};
pub use context::SeededEntropy;
pub use error::SimError;
pub use exporter::SimExport;
pub use progress::TracingProgress;
pub use runner::{NodeReport, ScenarioMetrics, ScenarioResult, ScenarioRunner};
