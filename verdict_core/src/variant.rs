//! Decision cardinality variants.
//!
//! A [`Network`](crate::Network) is parameterized by one of the two variants
//! below. Networks of different variants never share a registry, so a binary
//! node can only correlate with binary nodes and vice versa.

use crate::error::NetworkError;
use crate::outcome::{Decided, Outcome, TernaryOutcome};
use crate::probability::{self, TernaryDistribution};

use rand::Rng;
use serde::Serialize;
use std::fmt::Debug;

/// Behavior that differs between binary and ternary decision-makers.
pub trait Variant: Debug + Clone + Copy + PartialEq + Default + 'static {
    /// A single drawn decision.
    type Outcome: Decided + Debug + PartialEq + Serialize;

    /// The distribution a decision is drawn from.
    type Distribution: Copy + Debug + PartialEq + Serialize;

    /// Construction-time calibration derived from the node spec.
    type Calibration: Copy + Debug + PartialEq;

    /// Human-readable variant name.
    const NAME: &'static str;

    /// Whether nodes of this variant reject themselves as correlates.
    const CHECKS_SELF_CORRELATION: bool;

    /// Derives the calibration from an optional indecision probability.
    fn calibrate(node: &str, p_neutral: Option<f64>) -> Result<Self::Calibration, NetworkError>;

    /// Distribution for an aggregated signal.
    fn distribution(psum: f64, calibration: &Self::Calibration) -> Self::Distribution;

    /// Returns true when the distribution can be drawn from.
    fn is_drawable(distribution: &Self::Distribution) -> bool;

    /// Draws one outcome from the node's generator.
    fn draw<R: Rng + ?Sized>(distribution: &Self::Distribution, rng: &mut R) -> Self::Outcome;
}

/// Two-way decisions: `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Binary;

impl Variant for Binary {
    type Outcome = Outcome;
    type Distribution = f64;
    type Calibration = ();

    const NAME: &'static str = "binary";
    const CHECKS_SELF_CORRELATION: bool = false;

    fn calibrate(node: &str, p_neutral: Option<f64>) -> Result<(), NetworkError> {
        match p_neutral {
            Some(_) => Err(NetworkError::IndecisionUnsupported(node.to_string())),
            None => Ok(()),
        }
    }

    fn distribution(psum: f64, _calibration: &()) -> f64 {
        probability::binary_probability(psum)
    }

    fn is_drawable(distribution: &f64) -> bool {
        distribution.is_finite() && (0.0..=1.0).contains(distribution)
    }

    fn draw<R: Rng + ?Sized>(distribution: &f64, rng: &mut R) -> Outcome {
        Outcome::from_bool(rng.gen_bool(*distribution))
    }
}

/// Three-way decisions: `0`, `1` or undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ternary;

impl Variant for Ternary {
    type Outcome = TernaryOutcome;
    type Distribution = TernaryDistribution;
    /// Odds inflation (`neutral`), or `None` for no injected indecision.
    type Calibration = Option<f64>;

    const NAME: &'static str = "ternary";
    const CHECKS_SELF_CORRELATION: bool = true;

    fn calibrate(node: &str, p_neutral: Option<f64>) -> Result<Option<f64>, NetworkError> {
        match p_neutral {
            None => Ok(None),
            Some(p) if p > 0.0 && p < 0.5 => Ok(Some(probability::neutral_from_indecision(p))),
            Some(p) => Err(NetworkError::InvalidIndecision {
                node: node.to_string(),
                p_neutral: p,
            }),
        }
    }

    fn distribution(psum: f64, calibration: &Option<f64>) -> TernaryDistribution {
        probability::ternary_distribution(psum, *calibration)
    }

    fn is_drawable(distribution: &TernaryDistribution) -> bool {
        distribution.is_finite()
    }

    fn draw<R: Rng + ?Sized>(distribution: &TernaryDistribution, rng: &mut R) -> TernaryOutcome {
        let dice: f64 = rng.gen();
        if dice <= distribution.p_negative {
            TernaryOutcome::Negative
        } else if dice <= distribution.p_negative + distribution.p_positive {
            TernaryOutcome::Positive
        } else {
            TernaryOutcome::Undecided
        }
    }
}
