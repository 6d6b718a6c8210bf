//! Schema discovery and validation.
//!
//! Models come from the distinct values of the model column. Categories come
//! from the header: every column starting with the canonical prefix of the
//! configured [`GroundTruthMode`] names one category. Each category is then
//! checked for the paired column it needs before it is admitted.

use crate::config::{EvalConfig, GroundTruthMode, AGGREGATE_MARKER};
use crate::error::SchemaError;
use crate::table::Table;
use std::collections::BTreeSet;
use tracing::warn;

/// Resolved column positions for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryColumns {
    /// Category name (column name with the prefix stripped)
    pub name: String,
    /// Index of the predicted-indicator column
    pub predicted: usize,
    /// Index of the ground-truth column; `None` in assumed-positive mode
    pub truth: Option<usize>,
}

/// Validated view of a table's evaluation schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Index of the model identifier column
    pub model_column: usize,
    /// Distinct model identifiers, sorted
    pub models: Vec<String>,
    /// Categories with every required column present, sorted by name
    pub categories: Vec<CategoryColumns>,
    /// Categories dropped because a required column is missing, sorted
    pub skipped: Vec<String>,
}

impl Schema {
    /// Discovers models and categories and validates column pairs.
    ///
    /// A category lacking its paired column is not an error: it lands in
    /// [`Schema::skipped`] and contributes nothing downstream.
    pub fn discover(table: &Table, config: &EvalConfig) -> Result<Self, SchemaError> {
        let model_column = table
            .column_index(&config.model_column)
            .ok_or_else(|| SchemaError::MissingModelColumn(config.model_column.clone()))?;
        let models = discover_models(table, &config.model_column)?;

        let mut categories = Vec::new();
        let mut skipped = Vec::new();

        for name in discover_categories(table.headers(), config.canonical_prefix()) {
            if name == AGGREGATE_MARKER {
                return Err(SchemaError::ReservedCategory(name));
            }

            let predicted = table.column_index(&format!("{}{}", config.predicted_prefix, name));
            let truth = match config.mode {
                GroundTruthMode::AssumedPositive => None,
                GroundTruthMode::Labeled => {
                    table.column_index(&format!("{}{}", config.truth_prefix, name))
                }
            };

            match (predicted, config.mode.reads_truth_column(), truth) {
                (Some(predicted), false, _) => categories.push(CategoryColumns {
                    name,
                    predicted,
                    truth: None,
                }),
                (Some(predicted), true, Some(truth)) => categories.push(CategoryColumns {
                    name,
                    predicted,
                    truth: Some(truth),
                }),
                _ => {
                    warn!("Skipping category '{}': paired column missing", name);
                    skipped.push(name);
                }
            }
        }

        Ok(Self {
            model_column,
            models,
            categories,
            skipped,
        })
    }

    /// Names of the admitted categories, in order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// Distinct non-blank values of `model_column`, in lexicographic order.
pub fn discover_models(table: &Table, model_column: &str) -> Result<Vec<String>, SchemaError> {
    let column = table
        .column_index(model_column)
        .ok_or_else(|| SchemaError::MissingModelColumn(model_column.to_string()))?;

    let mut models = BTreeSet::new();
    let mut blank_rows = 0usize;
    for row in 0..table.len() {
        match table.cell(row, column) {
            Some(id) if !id.trim().is_empty() => {
                models.insert(id.to_string());
            }
            _ => blank_rows += 1,
        }
    }

    if blank_rows > 0 {
        warn!("Ignoring {} rows with a blank model identifier", blank_rows);
    }

    Ok(models.into_iter().collect())
}

/// Category names from headers starting with `prefix`, sorted and deduplicated.
///
/// A header equal to the bare prefix names no category and is ignored.
pub fn discover_categories(headers: &[String], prefix: &str) -> Vec<String> {
    headers
        .iter()
        .filter_map(|h| h.strip_prefix(prefix))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn labeled() -> EvalConfig {
        EvalConfig {
            mode: GroundTruthMode::Labeled,
            ..EvalConfig::default()
        }
    }

    #[test]
    fn test_models_are_sorted_and_distinct() {
        let t = table(
            &["identificador_modelo"],
            &[&["gpt"], &["claude"], &["gpt"], &[""], &["bert"]],
        );
        let models = discover_models(&t, "identificador_modelo").unwrap();
        assert_eq!(models, vec!["bert", "claude", "gpt"]);
    }

    #[test]
    fn test_missing_model_column() {
        let t = table(&["model", "pred_tem_xss"], &[]);
        let err = Schema::discover(&t, &EvalConfig::default()).unwrap_err();
        assert!(
            matches!(err, SchemaError::MissingModelColumn(c) if c == "identificador_modelo")
        );
    }

    #[test]
    fn test_categories_are_stripped_sorted_deduplicated() {
        let headers: Vec<String> = [
            "pred_tem_xss",
            "x",
            "pred_tem_csrf",
            "pred_tem_xss",
            "pred_tem_",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(
            discover_categories(&headers, "pred_tem_"),
            vec!["csrf", "xss"]
        );
    }

    #[test]
    fn test_assumed_positive_uses_predicted_columns() {
        let t = table(
            &["identificador_modelo", "pred_tem_xss", "real_tem_csrf"],
            &[&["M1", "true", "true"]],
        );
        let schema = Schema::discover(&t, &EvalConfig::default()).unwrap();
        assert_eq!(schema.category_names(), vec!["xss"]);
        assert_eq!(schema.categories[0].predicted, 1);
        assert_eq!(schema.categories[0].truth, None);
        assert!(schema.skipped.is_empty());
    }

    #[test]
    fn test_labeled_mode_requires_predicted_pair() {
        let t = table(
            &[
                "identificador_modelo",
                "real_tem_sqlInjection",
                "pred_tem_sqlInjection",
                "real_tem_xss",
                "pred_tem_csrf",
            ],
            &[],
        );
        let schema = Schema::discover(&t, &labeled()).unwrap();
        assert_eq!(schema.category_names(), vec!["sqlInjection"]);
        assert_eq!(schema.categories[0].truth, Some(1));
        assert_eq!(schema.categories[0].predicted, 2);
        // csrf has no ground-truth column, so it is never enumerated
        assert_eq!(schema.skipped, vec!["xss"]);
    }

    #[test]
    fn test_marker_named_category_is_rejected() {
        let header = format!("pred_tem_{}", AGGREGATE_MARKER);
        let t = table(&["identificador_modelo", header.as_str()], &[]);
        assert!(matches!(
            Schema::discover(&t, &EvalConfig::default()),
            Err(SchemaError::ReservedCategory(_))
        ));
    }
}
