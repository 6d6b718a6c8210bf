//! End-to-end tests for the load → evaluate → write pipeline.
//!
//! These tests exercise the full workflow on files in a temporary directory:
//! 1. Loading: `;`-delimited report → `Table`
//! 2. Evaluation: schema discovery → accumulation → micro-averaging
//! 3. Writing: result rows → `;`-delimited table with decimal commas

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vulneval_core::config::{EvalConfig, GroundTruthMode, AGGREGATE_MARKER};
use vulneval_core::error::{EvalError, SchemaError, TableError};
use vulneval_core::evaluation::{evaluate, ConfusionCounts, MetricRow};
use vulneval_core::report::write_report;
use vulneval_core::table::load_table;

// ============================================================================
// Fixtures
// ============================================================================

const PREDICTED_ONLY_REPORT: &str = "\
identificador_modelo;arquivo;pred_tem_xss;pred_tem_sqlInjection
gpt-4o;a.php;True;False
llama-3;a.php;False;False
gpt-4o;b.php;true;TRUE
llama-3;b.php;True;
gpt-4o;c.php;False;True
";

const LABELED_REPORT: &str = "\
identificador_modelo;real_tem_sqlInjection;pred_tem_sqlInjection;real_tem_xss;pred_tem_xss;real_tem_csrf
M1;true;true;false;true;true
M1;true;false;false;false;false
M1;false;false;true;true;true
";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn labeled() -> EvalConfig {
    EvalConfig {
        mode: GroundTruthMode::Labeled,
        ..EvalConfig::default()
    }
}

fn run(input: &Path, output: &Path, config: &EvalConfig) -> Result<Vec<MetricRow>, EvalError> {
    let table = load_table(input)?;
    let report = evaluate(&table, config)?;
    write_report(output, &report.rows)?;
    Ok(report.rows)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_predicted_only_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "relatorio.csv", PREDICTED_ONLY_REPORT);
    let output = dir.path().join("analise.csv");

    let rows = run(&input, &output, &EvalConfig::default()).unwrap();
    assert_eq!(rows.len(), 6, "2 models x (2 categories + aggregate)");

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    let gpt_overall = format!("gpt-4o;{};4;0;2;0;0,6667;1,0000;0,6667;0,8000", AGGREGATE_MARKER);
    let llama_overall = format!("llama-3;{};1;0;3;0;0,2500;1,0000;0,2500;0,4000", AGGREGATE_MARKER);
    assert_eq!(
        lines,
        vec![
            "Model;Category;TP;FP;FN;TN;Accuracy;Precision;Recall;F1-Score",
            "gpt-4o;sqlInjection;2;0;1;0;0,6667;1,0000;0,6667;0,8000",
            "gpt-4o;xss;2;0;1;0;0,6667;1,0000;0,6667;0,8000",
            gpt_overall.as_str(),
            "llama-3;sqlInjection;0;0;2;0;0,0000;0,0000;0,0000;0,0000",
            "llama-3;xss;1;0;1;0;0,5000;1,0000;0,5000;0,6667",
            llama_overall.as_str(),
        ]
    );
}

#[test]
fn test_labeled_report_reads_ground_truth() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "relatorio.csv", LABELED_REPORT);
    let output = dir.path().join("analise.csv");

    let rows = run(&input, &output, &labeled()).unwrap();

    // csrf has no predicted column and is dropped
    let categories: Vec<&str> = rows.iter().map(|r| r.category.label()).collect();
    assert_eq!(categories, vec!["sqlInjection", "xss", AGGREGATE_MARKER]);

    assert_eq!(rows[0].counts, ConfusionCounts::new(1, 0, 1, 1));
    assert_eq!(rows[1].counts, ConfusionCounts::new(1, 1, 0, 1));
    assert_eq!(rows[2].counts, ConfusionCounts::new(2, 1, 1, 2));

    let sqli = &rows[0].metrics;
    assert!((sqli.precision - 1.0).abs() < 1e-6);
    assert!((sqli.recall - 0.5).abs() < 1e-6);
    assert!((sqli.f1_score - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "relatorio.csv", PREDICTED_ONLY_REPORT);
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    run(&input, &first, &EvalConfig::default()).unwrap();
    run(&input, &second, &EvalConfig::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.csv");
    let output = dir.path().join("analise.csv");

    let err = run(&input, &output, &EvalConfig::default()).unwrap_err();
    assert!(matches!(err, EvalError::Table(TableError::MissingInput(_))));
    assert!(!output.exists());
}

#[test]
fn test_missing_model_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "relatorio.csv", "modelo;pred_tem_xss\nM1;true\n");
    let output = dir.path().join("analise.csv");

    let err = run(&input, &output, &EvalConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EvalError::Schema(SchemaError::MissingModelColumn(_))
    ));
    assert!(!output.exists());
}

#[test]
fn test_custom_column_names() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "report.csv",
        "model;gt_xss;guess_xss\nA;true;true\nA;false;true\n",
    );
    let output = dir.path().join("out.csv");
    let config = EvalConfig {
        mode: GroundTruthMode::Labeled,
        model_column: "model".into(),
        predicted_prefix: "guess_".into(),
        truth_prefix: "gt_".into(),
    };

    let rows = run(&input, &output, &config).unwrap();
    assert_eq!(rows[0].counts, ConfusionCounts::new(1, 1, 0, 0));
}
