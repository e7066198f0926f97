//! High-level conversion API.
//!
//! Combines every step: read, decode, parse, render and write.
//!
//! # Example
//!
//! ```rust,ignore
//! use csv2json::{convert, ConvertOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = convert(&ConvertOptions::default())?;
//!     println!("Converted {} rows", summary.row_count);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::logs::{log_info, log_info_indent, log_success};
use crate::output::{render_json, write_output};
use crate::parser::parse_bytes;

/// Input file used when none is given
pub const DEFAULT_INPUT: &str = "assets/dogBreeds.csv";

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "assets/dogBreeds.json";

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// CSV file to read
    pub input: PathBuf,

    /// JSON file to create or overwrite
    pub output: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSummary {
    pub encoding: String,
    pub headers: Vec<String>,
    pub row_count: usize,
    pub bytes_written: usize,
}

/// Convert the CSV file at `options.input` into a JSON file at `options.output`.
///
/// The input is read and closed before the output is opened. Nothing is
/// written if reading or parsing fails.
pub fn convert(options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    log_info(format!("📖 Reading {}", options.input.display()));
    let bytes = read_input(&options.input)?;

    let dataset = parse_bytes(&bytes)?;
    log_success(format!("Encoding: {}", dataset.encoding));
    log_success(format!("Read {} rows", dataset.len()));
    log_info_indent(format!("Columns: {}", dataset.headers.join(", ")), 1);

    let json = render_json(&dataset)?;

    log_info(format!("💾 Writing {}", options.output.display()));
    write_output(&options.output, &json)?;
    log_success(format!("Wrote {} bytes", json.len()));

    Ok(ConvertSummary {
        encoding: dataset.encoding,
        headers: dataset.headers,
        row_count: dataset.records.len(),
        bytes_written: json.len(),
    })
}

/// Convert CSV bytes to JSON text without touching the filesystem.
pub fn convert_bytes(bytes: &[u8]) -> ConvertResult<String> {
    let dataset = parse_bytes(bytes)?;
    Ok(render_json(&dataset)?)
}

fn read_input(path: &Path) -> ConvertResult<Vec<u8>> {
    fs::read(path).map_err(|source| ConvertError::InputOpen {
        path: path.to_path_buf(),
        source,
    })
}
