//! Error types for the conversion pipeline.
//!
//! - [`CsvError`] - tabular parsing errors
//! - [`ConvertError`] - top-level errors returned by [`crate::pipeline::convert`]
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The underlying reader rejected the input.
    #[error("Invalid CSV format: {0}")]
    Reader(#[from] csv::Error),

    /// A data row carries more fields than the header names.
    #[error("Line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// Each variant maps to one stage of the pipeline so callers can tell
/// where a run stopped.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or read.
    #[error("Cannot read input '{}': {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was read but could not be parsed.
    #[error("CSV error: {0}")]
    Parse(#[from] CsvError),

    /// The dataset could not be rendered as JSON.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Cannot write output '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
