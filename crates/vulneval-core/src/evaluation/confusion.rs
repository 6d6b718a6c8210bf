//! Confusion-matrix accumulation per (model, category).
//!
//! For every row of a model, the ground-truth flag and the predicted flag of
//! a category are compared and counted into one of four cells:
//!
//! | truth | predicted | cell |
//! |-------|-----------|------|
//! | true  | true      | TP   |
//! | false | true      | FP   |
//! | true  | false     | FN   |
//! | false | false     | TN   |

use super::labels::parse_flag;
use super::schema::{CategoryColumns, Schema};
use crate::table::Table;
use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Binary classification outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
}

impl ConfusionCounts {
    /// Creates counts from explicit cell values.
    pub fn new(
        true_positive: u64,
        false_positive: u64,
        false_negative: u64,
        true_negative: u64,
    ) -> Self {
        Self {
            true_positive,
            false_positive,
            false_negative,
            true_negative,
        }
    }

    /// Counts `(truth, predicted)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (bool, bool)>) -> Self {
        let mut counts = Self::default();
        for (truth, predicted) in pairs {
            counts.record(truth, predicted);
        }
        counts
    }

    /// Adds one observation to the matching cell.
    pub fn record(&mut self, truth: bool, predicted: bool) {
        match (truth, predicted) {
            (true, true) => self.true_positive += 1,
            (false, true) => self.false_positive += 1,
            (true, false) => self.false_negative += 1,
            (false, false) => self.true_negative += 1,
        }
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }
}

impl Add for ConfusionCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            true_positive: self.true_positive + rhs.true_positive,
            false_positive: self.false_positive + rhs.false_positive,
            false_negative: self.false_negative + rhs.false_negative,
            true_negative: self.true_negative + rhs.true_negative,
        }
    }
}

impl AddAssign for ConfusionCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ConfusionCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a ConfusionCounts> for ConfusionCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Indices of the rows whose model column equals `model`.
pub fn rows_for_model(table: &Table, schema: &Schema, model: &str) -> Vec<usize> {
    (0..table.len())
        .filter(|&row| table.cell(row, schema.model_column) == Some(model))
        .collect()
}

/// Counts one category over the given rows.
///
/// Without a ground-truth column every row is treated as positive, so FP and
/// TN stay zero.
pub fn count_category(
    table: &Table,
    rows: &[usize],
    category: &CategoryColumns,
) -> ConfusionCounts {
    ConfusionCounts::from_pairs(rows.iter().map(|&row| {
        let truth = match category.truth {
            Some(column) => parse_flag(table.cell(row, column)),
            None => true,
        };
        let predicted = parse_flag(table.cell(row, category.predicted));
        (truth, predicted)
    }))
}

/// Per-category counts for one model, in schema category order.
///
/// Only categories admitted by [`Schema::discover`] are counted; skipped
/// categories produce no entry.
pub fn accumulate_model(
    table: &Table,
    schema: &Schema,
    model: &str,
) -> Vec<(String, ConfusionCounts)> {
    let rows = rows_for_model(table, schema, model);

    schema
        .categories
        .iter()
        .map(|category| {
            let counts = count_category(table, &rows, category);
            debug!(
                "{} / {}: tp={} fp={} fn={} tn={}",
                model,
                category.name,
                counts.true_positive,
                counts.false_positive,
                counts.false_negative,
                counts.true_negative
            );
            (category.name.clone(), counts)
        })
        .collect()
}
