//! # vulneval Core
//!
//! Classification quality metrics for vulnerability-detection reports.
//!
//! A report is a `;`-delimited table with one row per evaluated sample: a
//! model identifier column plus boolean-like indicator columns per
//! vulnerability category. This crate computes TP/FP/FN/TN, accuracy,
//! precision, recall and F1 per (model, category), micro-averages them per
//! model and writes the result table.
//!
//! ## Modules
//!
//! - [`config`] - Format constants and [`config::EvalConfig`]
//! - [`error`] - Error types for table I/O and schema validation
//! - [`table`] - Loading delimited reports into memory
//! - [`evaluation`] - Schema discovery, accumulation, metrics, micro-averaging
//! - [`report`] - Writing the result table
//!
//! ## Example
//!
//! ```no_run
//! use vulneval_core::config::EvalConfig;
//! use vulneval_core::{evaluation, report, table};
//!
//! let input = table::load_table("relatorio_consolidado.csv")?;
//! let result = evaluation::evaluate(&input, &EvalConfig::default())?;
//! report::write_report("analise_quantitativa.csv", &result.rows)?;
//! # Ok::<(), vulneval_core::error::EvalError>(())
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod table;
