//! Per-model, per-category classification quality evaluation.
//!
//! This module turns a loaded report [`Table`] into confusion-matrix counts
//! and ratio metrics for every (model, category) pair, plus one micro-averaged
//! row per model.
//!
//! # Pipeline
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Schema discovery | [`schema`] | sorted models, validated categories |
//! | Accumulation | [`confusion`] | TP/FP/FN/TN per (model, category) |
//! | Metric derivation | [`metrics`] | accuracy, precision, recall, F1 |
//! | Micro-averaging | [`aggregate`] | one aggregate row per model |
//!
//! # Ground-truth modes
//!
//! | Mode | Categories from | Ground truth |
//! |------|-----------------|--------------|
//! | [`GroundTruthMode::AssumedPositive`] | predicted columns | always `true` |
//! | [`GroundTruthMode::Labeled`] | ground-truth columns | read per row |
//!
//! Assumed-positive mode can only ever produce TP and FN, so its precision is
//! ≈1 whenever anything was predicted. It is kept for reports that carry no
//! ground-truth columns.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vulneval_core::config::EvalConfig;
//! use vulneval_core::evaluation::evaluate;
//! use vulneval_core::table::read_table;
//!
//! let data = "identificador_modelo;pred_tem_xss\nM1;true\nM1;false\n";
//! let table = read_table(data.as_bytes(), Path::new("report.csv")).unwrap();
//! let report = evaluate(&table, &EvalConfig::default()).unwrap();
//!
//! assert_eq!(report.rows.len(), 2); // xss + aggregate
//! assert_eq!(report.rows[1].counts.true_positive, 1);
//! ```

pub mod aggregate;
pub mod confusion;
pub mod labels;
pub mod metrics;
pub mod schema;

pub use aggregate::{build_model_rows, micro_average, MetricRow, RowCategory};
pub use confusion::{accumulate_model, count_category, ConfusionCounts};
pub use labels::parse_flag;
pub use metrics::{accuracy, f1_score, precision, recall, RatioMetrics};
pub use schema::{discover_categories, discover_models, CategoryColumns, Schema};

use crate::config::{EvalConfig, GroundTruthMode};
use crate::error::SchemaError;
use crate::table::Table;
use serde::Serialize;
use tracing::{info, warn};

/// Everything one evaluation run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Ground-truth mode the report was computed in
    pub mode: GroundTruthMode,
    /// Models in output order
    pub models: Vec<String>,
    /// Evaluated categories in output order
    pub categories: Vec<String>,
    /// Categories excluded for a missing paired column
    pub skipped_categories: Vec<String>,
    /// Result rows: per model, categories then the aggregate row
    pub rows: Vec<MetricRow>,
}

impl EvalReport {
    /// Aggregate rows only, one per model.
    pub fn aggregate_rows(&self) -> impl Iterator<Item = &MetricRow> {
        self.rows.iter().filter(|r| r.category.is_aggregate())
    }
}

/// Runs schema discovery, accumulation and aggregation over `table`.
///
/// Output ordering is fully determined by the input: models and categories
/// are sorted lexicographically and each model's aggregate row comes last.
pub fn evaluate(table: &Table, config: &EvalConfig) -> Result<EvalReport, SchemaError> {
    let schema = Schema::discover(table, config)?;

    if config.mode == GroundTruthMode::AssumedPositive {
        warn!("Ground truth assumed positive for every row; FP and TN will be zero");
    }

    let mut rows = Vec::with_capacity(schema.models.len() * (schema.categories.len() + 1));
    for model in &schema.models {
        let per_category = accumulate_model(table, &schema, model);
        let model_rows = build_model_rows(model, &per_category);

        if let Some(aggregate) = model_rows.last() {
            info!(
                "{}: {} categories, precision={:.4} recall={:.4} f1={:.4}",
                model,
                per_category.len(),
                aggregate.metrics.precision,
                aggregate.metrics.recall,
                aggregate.metrics.f1_score
            );
        }
        rows.extend(model_rows);
    }

    Ok(EvalReport {
        mode: config.mode,
        models: schema.models.clone(),
        categories: schema.category_names(),
        skipped_categories: schema.skipped,
        rows,
    })
}
