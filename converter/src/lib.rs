//! # csv2json - CSV to JSON record conversion
//!
//! Reads a CSV file whose first row names the fields and writes a JSON array
//! with one object per data row. Every value stays a string.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Dataset   │────▶│  JSON File  │
//! │  (UTF-8/…)  │     │  (decode)   │     │  (records)  │     │ (4 spaces)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv2json::{convert, ConvertOptions};
//!
//! let summary = convert(&ConvertOptions::default()).unwrap();
//! println!("Converted {} rows", summary.row_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Record and Dataset
//! - [`parser`] - Decoding and CSV parsing
//! - [`output`] - JSON rendering and writing
//! - [`pipeline`] - End-to-end conversion
//! - [`logs`] - Console logging

// Core modules
pub mod error;
pub mod models;

// Conversion steps
pub mod parser;
pub mod output;
pub mod pipeline;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, ConvertResult, CsvError, CsvResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Dataset, Record};

// =============================================================================
// Re-exports - Parsing and output
// =============================================================================

pub use parser::{decode_content, detect_encoding, parse_bytes, parse_csv};
pub use output::{render_json, write_output};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    convert,
    convert_bytes,
    ConvertOptions,
    ConvertSummary,
    DEFAULT_INPUT,
    DEFAULT_OUTPUT,
};
