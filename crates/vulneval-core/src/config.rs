//! Evaluation configuration and format constants.
//!
//! This module contains the constants that define the on-disk report format
//! and the numeric behavior of metric derivation, plus [`EvalConfig`], the
//! runtime knobs for a single evaluation run.
//!
//! # Usage
//!
//! ```
//! use vulneval_core::config::{EvalConfig, GroundTruthMode, EPSILON};
//!
//! let config = EvalConfig {
//!     mode: GroundTruthMode::Labeled,
//!     ..EvalConfig::default()
//! };
//! assert_eq!(config.model_column, "identificador_modelo");
//! assert!(EPSILON > 0.0);
//! ```

use serde::Serialize;

// =============================================================================
// Metric Derivation
// =============================================================================

/// Stabilizer added to every metric denominator.
///
/// Keeps precision, recall, F1 and accuracy finite when a category has no
/// positive predictions or labels. The resulting bias is on the order of ε.
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// Report Format
// =============================================================================

/// Field separator for both the input report and the result table.
pub const FIELD_DELIMITER: u8 = b';';

/// Decimal separator used when writing ratio metrics.
pub const DECIMAL_SEPARATOR: char = ',';

/// Number of decimal places for ratio metrics in the result table.
pub const DECIMAL_PLACES: usize = 4;

/// Category value of the per-model micro-averaged row.
pub const AGGREGATE_MARKER: &str = "== OVERALL (Micro Average) ==";

/// Header of the result table, in column order.
pub const RESULT_HEADER: [&str; 10] = [
    "Model",
    "Category",
    "TP",
    "FP",
    "FN",
    "TN",
    "Accuracy",
    "Precision",
    "Recall",
    "F1-Score",
];

// =============================================================================
// Input Schema Defaults
// =============================================================================

/// Column holding the model identifier.
pub const DEFAULT_MODEL_COLUMN: &str = "identificador_modelo";

/// Prefix of predicted-indicator columns (`pred_tem_<category>`).
pub const DEFAULT_PREDICTED_PREFIX: &str = "pred_tem_";

/// Prefix of ground-truth indicator columns (`real_tem_<category>`).
pub const DEFAULT_TRUTH_PREFIX: &str = "real_tem_";

/// Default input report file name, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "relatorio_consolidado.csv";

/// Default result table file name, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "analise_quantitativa.csv";

// =============================================================================
// Runtime Configuration
// =============================================================================

/// How the ground truth of each row is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroundTruthMode {
    /// Every row is treated as ground-truth positive.
    ///
    /// Used for reports that only carry predicted columns. False positives and
    /// true negatives are structurally zero in this mode, so the resulting
    /// matrix is effectively a recall-only evaluation.
    #[default]
    AssumedPositive,
    /// Ground truth is read from a `<truth_prefix><category>` column.
    Labeled,
}

impl GroundTruthMode {
    /// Whether this mode reads a ground-truth column per category.
    pub fn reads_truth_column(self) -> bool {
        matches!(self, GroundTruthMode::Labeled)
    }
}

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Ground-truth mode; also decides which column set names the categories.
    pub mode: GroundTruthMode,
    /// Name of the model identifier column.
    pub model_column: String,
    /// Prefix of predicted-indicator columns.
    pub predicted_prefix: String,
    /// Prefix of ground-truth indicator columns (labeled mode only).
    pub truth_prefix: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            mode: GroundTruthMode::default(),
            model_column: DEFAULT_MODEL_COLUMN.to_string(),
            predicted_prefix: DEFAULT_PREDICTED_PREFIX.to_string(),
            truth_prefix: DEFAULT_TRUTH_PREFIX.to_string(),
        }
    }
}

impl EvalConfig {
    /// Prefix of the columns that enumerate categories in the configured mode.
    pub fn canonical_prefix(&self) -> &str {
        match self.mode {
            GroundTruthMode::AssumedPositive => &self.predicted_prefix,
            GroundTruthMode::Labeled => &self.truth_prefix,
        }
    }
}
