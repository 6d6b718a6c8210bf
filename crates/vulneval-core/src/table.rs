//! In-memory delimited tables.
//!
//! The evaluation pipeline works on a fully loaded [`Table`]: a header row
//! plus string cells. Loading is a thin wrapper around [`csv::ReaderBuilder`]
//! configured for the `;`-separated report format.

use crate::config::FIELD_DELIMITER;
use crate::error::TableError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// A header row and its data rows, all cells kept as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from a header and rows.
    ///
    /// Rows may be shorter than the header; absent cells read as `None`.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cell text, or `None` if the row is too short or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}

/// Loads a `;`-delimited table from `path`.
///
/// Returns [`TableError::MissingInput`] if the path is not an existing file,
/// so callers can tell "nothing to evaluate" apart from a malformed report.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table, TableError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TableError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TableError::MissingInput(path.to_path_buf()),
        _ => TableError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let table = read_table(file, path)?;
    debug!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

/// Reads a `;`-delimited table from any reader.
///
/// `source` is only used to label errors.
pub fn read_table<R: Read>(reader: R, source: &Path) -> Result<Table, TableError> {
    let read_err = |e: csv::Error| TableError::Read {
        path: source.to_path_buf(),
        reason: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(Table::new(headers, rows))
}
