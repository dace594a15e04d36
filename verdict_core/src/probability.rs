//! Odds-ratio aggregation of correlated signals.
//!
//! A node's correlates each contribute `weight * signal`, where the signal is
//! `+1` for a positive decision and `-1` for a negative one. The running sum
//! `psum` shifts the odds of one alternative:
//!
//! ```text
//! odds_against = 1 + max(0, -psum)
//! odds_for     = 1 + max(0,  psum)
//! P(positive)  = odds_for / (odds_against + odds_for)
//! ```
//!
//! Both odds are at least 1, so the probability stays inside (0, 1) and sits
//! at exactly 0.5 when nothing pushes it.

use serde::{Deserialize, Serialize};

/// Sums `weight * signal` over all signals that are present.
///
/// Missing signals (indecision) are skipped rather than counted as zero.
pub fn aggregate<I>(signals: I) -> f64
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    signals
        .into_iter()
        .filter_map(|(weight, signal)| signal.map(|s| weight * s))
        .sum()
}

/// Returns `(odds_against, odds_for)` for an aggregated signal.
pub fn odds(psum: f64) -> (f64, f64) {
    (1.0 + (-psum).max(0.0), 1.0 + psum.max(0.0))
}

/// Probability of a positive binary decision.
pub fn binary_probability(psum: f64) -> f64 {
    let (odds_against, odds_for) = odds(psum);
    odds_for / (odds_against + odds_for)
}

/// Converts a desired indecision probability into the odds inflation used by
/// [`ternary_distribution`].
///
/// The calibration targets the neutral case `psum = 0`, where the two
/// alternatives have base odds 1 each.
pub fn neutral_from_indecision(p_neutral: f64) -> f64 {
    (2.0 - 1.0 / p_neutral).abs() - 1.0
}

/// Three-way split of a ternary decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TernaryDistribution {
    pub p_negative: f64,
    pub p_positive: f64,
    pub p_undecided: f64,
}

impl TernaryDistribution {
    /// Sum of all three masses (1 up to rounding).
    pub fn total(&self) -> f64 {
        self.p_negative + self.p_positive + self.p_undecided
    }

    /// Returns true when every mass is a finite number.
    pub fn is_finite(&self) -> bool {
        self.p_negative.is_finite() && self.p_positive.is_finite() && self.p_undecided.is_finite()
    }
}

/// Ternary split for an aggregated signal.
///
/// Without calibration the undecided mass is zero. With calibration both odds
/// are inflated in proportion to their share before a third unit of odds is
/// added for indecision.
pub fn ternary_distribution(psum: f64, neutral: Option<f64>) -> TernaryDistribution {
    let (mut odds_against, mut odds_for) = odds(psum);
    let mut total = odds_against + odds_for;

    if let Some(neutral) = neutral {
        odds_against += neutral * odds_against / total;
        odds_for += neutral * odds_for / total;
        total = odds_against + odds_for + 1.0;
    }

    let p_negative = odds_against / total;
    let p_positive = odds_for / total;

    TernaryDistribution {
        p_negative,
        p_positive,
        p_undecided: 1.0 - p_negative - p_positive,
    }
}
