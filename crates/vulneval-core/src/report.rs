//! Result table serialization.
//!
//! Rows are written `;`-separated with the header from
//! [`RESULT_HEADER`]. Counts are plain integers; ratios use
//! [`DECIMAL_PLACES`] decimals and [`DECIMAL_SEPARATOR`] so the file opens
//! cleanly in spreadsheet locales that expect a decimal comma.

use crate::config::{DECIMAL_PLACES, DECIMAL_SEPARATOR, FIELD_DELIMITER, RESULT_HEADER};
use crate::error::TableError;
use crate::evaluation::MetricRow;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Formats a ratio with fixed decimals and the report's decimal separator.
pub fn format_ratio(value: f64) -> String {
    format!("{:.*}", DECIMAL_PLACES, value).replace('.', &DECIMAL_SEPARATOR.to_string())
}

/// Field values of one row in [`RESULT_HEADER`] order.
pub fn row_fields(row: &MetricRow) -> [String; 10] {
    [
        row.model.clone(),
        row.category.label().to_string(),
        row.counts.true_positive.to_string(),
        row.counts.false_positive.to_string(),
        row.counts.false_negative.to_string(),
        row.counts.true_negative.to_string(),
        format_ratio(row.metrics.accuracy),
        format_ratio(row.metrics.precision),
        format_ratio(row.metrics.recall),
        format_ratio(row.metrics.f1_score),
    ]
}

/// Writes the header and `rows` to any writer.
pub fn write_rows<W: Write>(writer: W, rows: &[MetricRow]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(RESULT_HEADER)?;
    for row in rows {
        writer.write_record(row_fields(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the result table to `path`, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, rows: &[MetricRow]) -> Result<(), TableError> {
    let path = path.as_ref();
    let write_err = |reason: String| TableError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    write_rows(file, rows).map_err(|e| write_err(e.to_string()))?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
