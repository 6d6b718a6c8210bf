//! Error types for vulneval-core.
//!
//! Table I/O and schema validation each have their own error enum;
//! [`EvalError`] wraps both for callers that drive the whole pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing delimited tables.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// Input path does not resolve to a readable file
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    /// Input could not be opened or parsed
    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
    /// Result table could not be written
    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// Errors found by the upfront schema validation pass.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// The model identifier column is absent from the header
    #[error("Model column '{0}' not found in table header")]
    MissingModelColumn(String),
    /// A discovered category collides with the aggregate marker
    #[error("Category '{0}' collides with the aggregate row marker")]
    ReservedCategory(String),
}

/// Any failure of a full load → evaluate → write run.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
