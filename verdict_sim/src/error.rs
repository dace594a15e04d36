//! Error types for the Verdict simulator.

use thiserror::Error;
use verdict_core::NetworkError;

/// Errors that can occur while loading or running simulations.
#[derive(Debug, Error)]
pub enum SimError {
    /// The network rejected a node or a query
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Reading a definition or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A network definition or export could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A definition is well-formed JSON but not a usable network
    #[error("Invalid network definition: {0}")]
    InvalidDefinition(String),
}

impl SimError {
    /// Creates an invalid-definition error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }
}
