//! Error types for Verdict networks.

use thiserror::Error;

/// Broad category of a [`NetworkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The network was wired or calibrated incorrectly
    Configuration,

    /// A name or position could not be resolved
    Lookup,

    /// Arithmetic produced a value the model cannot draw from
    Numeric,
}

/// Errors raised while building or querying a network.
///
/// Nothing is retried or downgraded: every variant reaches the caller of
/// `create`, `predict` or `probability_at` unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("Node name must not be empty")]
    EmptyName,

    #[error("Node '{0}' correlates with itself")]
    SelfCorrelation(String),

    #[error("Weight {weight} from '{node}' to '{correlate}' is not finite")]
    NonFiniteWeight {
        node: String,
        correlate: String,
        weight: f64,
    },

    #[error("Indecision probability {p_neutral} for '{node}' must lie in (0, 0.5)")]
    InvalidIndecision { node: String, p_neutral: f64 },

    #[error("Node '{0}' is binary and cannot be given an indecision probability")]
    IndecisionUnsupported(String),

    #[error("Correlation cycle: {}", .0.join(" -> "))]
    CorrelationCycle(Vec<String>),

    #[error("Correlation chain reaching '{node}' is deeper than {depth} nodes")]
    CorrelationTooDeep { node: String, depth: usize },

    #[error("Unknown node: '{0}'")]
    UnknownNode(String),

    #[error("Node '{node}' correlates with unknown node '{correlate}'")]
    UnknownCorrelate { node: String, correlate: String },

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Non-finite probability for '{node}' at index {index}")]
    NonFiniteProbability { node: String, index: usize },
}

impl NetworkError {
    /// Creates an unknown-node error.
    pub fn unknown(node: impl Into<String>) -> Self {
        Self::UnknownNode(node.into())
    }

    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName
            | Self::SelfCorrelation(_)
            | Self::NonFiniteWeight { .. }
            | Self::InvalidIndecision { .. }
            | Self::IndecisionUnsupported(_)
            | Self::CorrelationCycle(_)
            | Self::CorrelationTooDeep { .. } => ErrorKind::Configuration,
            Self::UnknownNode(_)
            | Self::UnknownCorrelate { .. }
            | Self::IndexOutOfRange { .. } => ErrorKind::Lookup,
            Self::NonFiniteProbability { .. } => ErrorKind::Numeric,
        }
    }
}
