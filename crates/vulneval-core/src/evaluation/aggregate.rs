//! Result rows and per-model micro-averaging.
//!
//! A micro-average sums the confusion counts of every processed category and
//! derives the metrics once from the totals, rather than averaging the
//! per-category ratios.

use super::confusion::ConfusionCounts;
use super::metrics::RatioMetrics;
use crate::config::AGGREGATE_MARKER;
use serde::{Serialize, Serializer};
use std::fmt;

/// Category column of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCategory {
    /// A discovered category
    Category(String),
    /// The per-model micro-averaged row
    Aggregate,
}

impl RowCategory {
    /// Text written to the result table.
    pub fn label(&self) -> &str {
        match self {
            RowCategory::Category(name) => name,
            RowCategory::Aggregate => AGGREGATE_MARKER,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, RowCategory::Aggregate)
    }
}

impl fmt::Display for RowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RowCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One line of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub model: String,
    pub category: RowCategory,
    #[serde(flatten)]
    pub counts: ConfusionCounts,
    #[serde(flatten)]
    pub metrics: RatioMetrics,
}

impl MetricRow {
    /// Builds a row, deriving metrics from `counts`.
    pub fn new(model: impl Into<String>, category: RowCategory, counts: ConfusionCounts) -> Self {
        Self {
            model: model.into(),
            category,
            metrics: RatioMetrics::from_counts(&counts),
            counts,
        }
    }
}

/// Micro-averaged aggregate row for `model`.
///
/// Emitted even when `per_category` is empty, in which case all counts are
/// zero and every metric is ≈0.
pub fn micro_average(model: &str, per_category: &[(String, ConfusionCounts)]) -> MetricRow {
    let totals: ConfusionCounts = per_category.iter().map(|(_, counts)| counts).sum();
    MetricRow::new(model, RowCategory::Aggregate, totals)
}

/// Per-category rows for `model` followed by its aggregate row.
pub fn build_model_rows(
    model: &str,
    per_category: &[(String, ConfusionCounts)],
) -> Vec<MetricRow> {
    let mut rows: Vec<MetricRow> = per_category
        .iter()
        .map(|(name, counts)| {
            MetricRow::new(model, RowCategory::Category(name.clone()), *counts)
        })
        .collect();
    rows.push(micro_average(model, per_category));
    rows
}
