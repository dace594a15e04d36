//! Agreement statistics between two prediction sequences.
//!
//! Used to compare a judge against ground truth (or against another judge).
//! Only positions where both sides made a decision are compared; indecision
//! is reported separately.

use crate::outcome::Decided;
use serde::Serialize;

/// Summary of how two sequences line up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Agreement {
    /// Positions inspected (the shorter of the two lengths)
    pub positions: usize,

    /// Positions where both sides decided
    pub compared: usize,

    /// Decided positions with equal values
    pub matches: usize,

    /// `matches / compared`, or 0 when nothing was compared
    pub match_rate: f64,

    /// Share of positions where at least one side was undecided
    pub undecided_rate: f64,

    /// Pearson correlation over decided positions (None if degenerate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<f64>,
}

/// Compares two sequences position by position.
pub fn agreement<A: Decided, B: Decided>(left: &[A], right: &[B]) -> Agreement {
    let pairs: Vec<(f64, f64)> = left
        .iter()
        .zip(right)
        .filter_map(|(l, r)| match (l.decided(), r.decided()) {
            (Some(l), Some(r)) => Some((f64::from(l), f64::from(r))),
            _ => None,
        })
        .collect();

    let positions = left.len().min(right.len());
    let compared = pairs.len();
    let matches = pairs.iter().filter(|(l, r)| l == r).count();

    Agreement {
        positions,
        compared,
        matches,
        match_rate: ratio(matches, compared),
        undecided_rate: ratio(positions - compared, positions),
        correlation: pearson(&pairs),
    }
}

/// Share of undecided positions in a single sequence.
pub fn undecided_rate<A: Decided>(sequence: &[A]) -> f64 {
    let undecided = sequence.iter().filter(|o| o.decided().is_none()).count();
    ratio(undecided, sequence.len())
}

/// Share of positive decisions among decided positions.
pub fn positive_rate<A: Decided>(sequence: &[A]) -> f64 {
    let decided: Vec<u8> = sequence.iter().filter_map(|o| o.decided()).collect();
    let positives = decided.iter().filter(|&&v| v == 1).count();
    ratio(positives, decided.len())
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_l = pairs.iter().map(|(l, _)| l).sum::<f64>() / n;
    let mean_r = pairs.iter().map(|(_, r)| r).sum::<f64>() / n;

    let (mut cov, mut var_l, mut var_r) = (0.0, 0.0, 0.0);
    for (l, r) in pairs {
        let (dl, dr) = (l - mean_l, r - mean_r);
        cov += dl * dr;
        var_l += dl * dl;
        var_r += dr * dr;
    }

    if var_l == 0.0 || var_r == 0.0 {
        return None;
    }
    Some(cov / (var_l * var_r).sqrt())
}
