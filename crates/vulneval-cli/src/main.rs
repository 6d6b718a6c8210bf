//! vulneval CLI - per-model vulnerability detection quality metrics.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate relatorio_consolidado.csv into analise_quantitativa.csv
//! vulneval
//!
//! # Read ground truth from real_tem_* columns
//! vulneval --mode labeled -i report.csv -o metrics.csv
//!
//! # Print every row, or the whole report as JSON
//! vulneval --full
//! vulneval --json
//! ```

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vulneval_core::config::{
    EvalConfig, GroundTruthMode, DEFAULT_MODEL_COLUMN, DEFAULT_PREDICTED_PREFIX,
    DEFAULT_TRUTH_PREFIX,
};
use vulneval_core::evaluation::evaluate;
use vulneval_core::report::write_report;
use vulneval_core::table::load_table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Treat every row as ground-truth positive (predicted columns only)
    AssumedPositive,
    /// Read ground truth from the truth-prefixed columns
    Labeled,
}

impl From<Mode> for GroundTruthMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::AssumedPositive => GroundTruthMode::AssumedPositive,
            Mode::Labeled => GroundTruthMode::Labeled,
        }
    }
}

/// Per-model, per-category classification metrics for vulnerability reports.
///
/// Reads a `;`-separated report, computes TP/FP/FN/TN, accuracy, precision,
/// recall and F1 per model and category plus a micro-averaged row per model,
/// and writes them to a `;`-separated result table.
#[derive(Parser)]
#[command(name = "vulneval", version, about)]
struct Cli {
    /// Input report (default: $VULNEVAL_INPUT or relatorio_consolidado.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Result table (default: $VULNEVAL_OUTPUT or analise_quantitativa.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How ground truth is obtained
    #[arg(long, value_enum, default_value = "assumed-positive")]
    mode: Mode,

    /// Name of the model identifier column
    #[arg(long, default_value = DEFAULT_MODEL_COLUMN)]
    model_column: String,

    /// Prefix of predicted-indicator columns
    #[arg(long, default_value = DEFAULT_PREDICTED_PREFIX)]
    predicted_prefix: String,

    /// Prefix of ground-truth columns (labeled mode)
    #[arg(long, default_value = DEFAULT_TRUTH_PREFIX)]
    truth_prefix: String,

    /// Print every row instead of only the micro-averaged rows
    #[arg(long)]
    full: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            mode: self.mode.into(),
            model_column: self.model_column.clone(),
            predicted_prefix: self.predicted_prefix.clone(),
            truth_prefix: self.truth_prefix.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let input = config::input_path(cli.input.as_ref());
    let output_path = config::output_path(cli.output.as_ref());

    let table = load_table(&input).context("Cannot evaluate report")?;
    info!("Loaded {} rows from {}", table.len(), input.display());

    let report = evaluate(&table, &cli.eval_config())
        .with_context(|| format!("Invalid report schema in {}", input.display()))?;

    // The summary is printed even if saving fails
    let saved = write_report(&output_path, &report.rows);
    if saved.is_ok() {
        eprintln!("Results saved to {}", output_path.display());
    }

    if cli.json {
        println!("{}", output::format_json(&report));
    } else {
        println!("{}", output::format_human(&report, cli.full));
    }

    saved.context("Result table was not saved")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vulneval"]);
        let config = cli.eval_config();
        assert_eq!(config, EvalConfig::default());
        assert!(cli.input.is_none());
        assert!(!cli.full && !cli.json);
    }

    #[test]
    fn test_cli_labeled_mode_and_prefixes() {
        let cli = Cli::parse_from([
            "vulneval",
            "--mode",
            "labeled",
            "--truth-prefix",
            "gt_",
            "-i",
            "in.csv",
        ]);
        let config = cli.eval_config();
        assert_eq!(config.mode, GroundTruthMode::Labeled);
        assert_eq!(config.truth_prefix, "gt_");
        assert_eq!(cli.input, Some(PathBuf::from("in.csv")));
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["vulneval", "--mode", "guess"]).is_err());
    }
}
