//! Outcome types for binary and ternary decision-makers.
//!
//! Both serialize as plain numbers so exported sequences read like the
//! classic `0/1` label arrays; the ternary undecided marker becomes `null`.

use serde::{Deserialize, Serialize};

/// Access to the numeric value of a decision, if one was made.
pub trait Decided: Copy {
    /// Returns `Some(0)` or `Some(1)`, or `None` for indecision.
    fn decided(self) -> Option<u8>;

    /// Maps the decision onto `{-1, +1}` via `2v - 1`.
    ///
    /// Indecision carries no signal and maps to `None`, never to zero.
    fn signal(self) -> Option<f64> {
        self.decided().map(|v| 2.0 * f64::from(v) - 1.0)
    }
}

/// Outcome of a binary decision-maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Negative,
    Positive,
}

impl Outcome {
    /// Converts a Bernoulli draw into an outcome.
    pub fn from_bool(positive: bool) -> Self {
        if positive {
            Outcome::Positive
        } else {
            Outcome::Negative
        }
    }

    /// Returns 0 or 1.
    pub fn value(self) -> u8 {
        match self {
            Outcome::Negative => 0,
            Outcome::Positive => 1,
        }
    }
}

impl Decided for Outcome {
    fn decided(self) -> Option<u8> {
        Some(self.value())
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Negative),
            1 => Ok(Outcome::Positive),
            other => Err(format!("binary outcome must be 0 or 1, got {}", other)),
        }
    }
}

/// Outcome of a ternary decision-maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Option<u8>", try_from = "Option<u8>")]
pub enum TernaryOutcome {
    Negative,
    Positive,
    Undecided,
}

impl TernaryOutcome {
    /// Returns true for the indecision marker.
    pub fn is_undecided(self) -> bool {
        matches!(self, TernaryOutcome::Undecided)
    }
}

impl Decided for TernaryOutcome {
    fn decided(self) -> Option<u8> {
        match self {
            TernaryOutcome::Negative => Some(0),
            TernaryOutcome::Positive => Some(1),
            TernaryOutcome::Undecided => None,
        }
    }
}

impl From<TernaryOutcome> for Option<u8> {
    fn from(outcome: TernaryOutcome) -> Self {
        outcome.decided()
    }
}

impl TryFrom<Option<u8>> for TernaryOutcome {
    type Error = String;

    fn try_from(value: Option<u8>) -> Result<Self, Self::Error> {
        match value {
            Some(0) => Ok(TernaryOutcome::Negative),
            Some(1) => Ok(TernaryOutcome::Positive),
            None => Ok(TernaryOutcome::Undecided),
            Some(other) => Err(format!("ternary outcome must be 0, 1 or null, got {}", other)),
        }
    }
}

impl From<Outcome> for TernaryOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Negative => TernaryOutcome::Negative,
            Outcome::Positive => TernaryOutcome::Positive,
        }
    }
}
