//! JSON rendering and output writing.
//!
//! The dataset is rendered as one JSON array with four-space indentation.
//! Non-ASCII characters are written as-is.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};
use crate::models::Dataset;

const INDENT: &[u8] = b"    ";

/// Render the dataset's records as a pretty-printed JSON array.
///
/// Output is deterministic: the same dataset always renders to the same text.
pub fn render_json(dataset: &Dataset) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    dataset.records.serialize(&mut ser)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `content` to `path` in one operation, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> ConvertResult<()> {
    fs::write(path, content).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
