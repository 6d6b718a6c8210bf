//! Ratio metrics derived from confusion-matrix counts.
//!
//! Every denominator carries the stabilizer [`EPSILON`], so no metric needs a
//! zero-denominator branch:
//!
//! ```text
//! precision = tp / (tp + fp + ε)
//! recall    = tp / (tp + fn + ε)
//! f1        = 2 · precision · recall / (precision + recall + ε)
//! accuracy  = (tp + tn) / (tp + fp + fn + tn + ε)
//! ```
//!
//! The results are biased by roughly ε relative to the exact ratios, which is
//! invisible at the 4 decimal places the result table uses.

use super::confusion::ConfusionCounts;
use crate::config::EPSILON;
use serde::Serialize;

/// Accuracy, precision, recall and F1 for one set of counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatioMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl RatioMetrics {
    /// Derives all four metrics from `counts`.
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        let precision = precision(counts);
        let recall = recall(counts);

        Self {
            accuracy: accuracy(counts),
            precision,
            recall,
            f1_score: f1_score(precision, recall),
        }
    }
}

/// Fraction of positive predictions that are correct.
pub fn precision(counts: &ConfusionCounts) -> f64 {
    let tp = counts.true_positive as f64;
    let fp = counts.false_positive as f64;
    tp / (tp + fp + EPSILON)
}

/// Fraction of actual positives that were predicted.
pub fn recall(counts: &ConfusionCounts) -> f64 {
    let tp = counts.true_positive as f64;
    let fn_ = counts.false_negative as f64;
    tp / (tp + fn_ + EPSILON)
}

/// Harmonic mean of precision and recall.
#[inline]
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    2.0 * (precision * recall) / (precision + recall + EPSILON)
}

/// Fraction of all observations classified correctly.
pub fn accuracy(counts: &ConfusionCounts) -> f64 {
    let correct = (counts.true_positive + counts.true_negative) as f64;
    correct / (counts.total() as f64 + EPSILON)
}
