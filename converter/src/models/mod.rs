//! Domain models for the conversion pipeline.
//!
//! - [`Record`] - one data row keyed by header field name
//! - [`Dataset`] - every record of one input file, in row order

use serde::Serialize;
use serde_json::{Map, Value};

/// One data row as an ordered JSON object.
///
/// Keys follow header order and every value is a JSON string.
pub type Record = Map<String, Value>;

/// Parsed contents of one CSV input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    /// Column headers, in file order
    pub headers: Vec<String>,
    /// One record per data row, in file order
    pub records: Vec<Record>,
    /// Encoding the input bytes were decoded with
    pub encoding: String,
}

impl Dataset {
    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build a record by pairing `values` with `headers` position by position.
///
/// Missing trailing values become empty strings. A repeated header keeps
/// its first position and takes the later column's value.
pub fn record_from_row<'a, I>(headers: &[String], values: I) -> Record
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values = values.into_iter();
    let mut record = Map::with_capacity(headers.len());

    for header in headers {
        let value = values.next().unwrap_or("");
        record.insert(header.clone(), Value::String(value.to_string()));
    }

    record
}
