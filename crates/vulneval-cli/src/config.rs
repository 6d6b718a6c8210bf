//! Path resolution for the CLI.
//!
//! Input and output locations resolve in this order:
//! 1. Command-line flag
//! 2. Environment variable (`VULNEVAL_INPUT` / `VULNEVAL_OUTPUT`)
//! 3. Default file name in the working directory

use std::path::PathBuf;
use vulneval_core::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Environment variable for the input report path
const INPUT_ENV: &str = "VULNEVAL_INPUT";

/// Environment variable for the result table path
const OUTPUT_ENV: &str = "VULNEVAL_OUTPUT";

/// Returns the report to evaluate.
pub fn input_path(custom: Option<&PathBuf>) -> PathBuf {
    resolve(custom, std::env::var(INPUT_ENV).ok(), DEFAULT_INPUT_FILE)
}

/// Returns the destination of the result table.
pub fn output_path(custom: Option<&PathBuf>) -> PathBuf {
    resolve(custom, std::env::var(OUTPUT_ENV).ok(), DEFAULT_OUTPUT_FILE)
}

fn resolve(custom: Option<&PathBuf>, env_value: Option<String>, default: &str) -> PathBuf {
    if let Some(path) = custom {
        return path.clone();
    }

    // Empty variables are treated as unset
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
