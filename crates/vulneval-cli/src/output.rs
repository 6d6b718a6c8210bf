//! Console output for evaluation results.
//!
//! Supports both a human-readable summary and JSON for scripting. The
//! persisted result table is written separately by `vulneval_core::report`.

use vulneval_core::evaluation::{EvalReport, MetricRow};

/// Formats the full report as pretty-printed JSON.
pub fn format_json(report: &EvalReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the discovered schema and the result rows for the terminal.
///
/// Only aggregate rows are listed unless `full` is set.
pub fn format_human(report: &EvalReport, full: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Models found: {}\n", join_or_none(&report.models)));
    output.push_str(&format!(
        "Categories found: {}\n",
        join_or_none(&report.categories)
    ));
    if !report.skipped_categories.is_empty() {
        output.push_str(&format!(
            "Skipped (missing paired column): {}\n",
            report.skipped_categories.join(", ")
        ));
    }

    let rows: Vec<&MetricRow> = if full {
        report.rows.iter().collect()
    } else {
        report.aggregate_rows().collect()
    };

    if rows.is_empty() {
        output.push_str("\nNo models to report.");
        return output;
    }

    output.push_str(&format!(
        "\n--- {} ---\n",
        if full { "Results" } else { "Micro-averaged results" }
    ));
    output.push_str(&format_rows(&rows));

    output.trim_end().to_string()
}

/// Renders rows as an aligned text table.
fn format_rows(rows: &[&MetricRow]) -> String {
    let model_width = column_width("Model", rows.iter().map(|r| r.model.as_str()));
    let category_width = column_width("Category", rows.iter().map(|r| r.category.label()));

    let mut output = format!(
        "{:<mw$} {:<cw$} {:>6} {:>6} {:>6} {:>6} {:>8} {:>9} {:>8} {:>8}\n",
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
        mw = model_width,
        cw = category_width
    );

    for row in rows {
        output.push_str(&format!(
            "{:<mw$} {:<cw$} {:>6} {:>6} {:>6} {:>6} {:>8.4} {:>9.4} {:>8.4} {:>8.4}\n",
            row.model,
            row.category.label(),
            row.counts.true_positive,
            row.counts.false_positive,
            row.counts.false_negative,
            row.counts.true_negative,
            row.metrics.accuracy,
            row.metrics.precision,
            row.metrics.recall,
            row.metrics.f1_score,
            mw = model_width,
            cw = category_width
        ));
    }

    output
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
