//! CSV parser with encoding fallback.
//!
//! Converts CSV rows into ordered JSON objects keyed by the header row.
//! Values are kept verbatim: no trimming, no type conversion.

use crate::error::{CsvError, CsvResult};
use crate::logs::log_warning;
use crate::models::{record_from_row, Dataset};

/// Field delimiter of the input format
pub const DELIMITER: u8 = b',';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with an explicit encoding label.
///
/// Unknown labels fall back to a lossy UTF-8 conversion.
pub fn decode_with(bytes: &[u8], encoding: &str) -> String {
    match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) => enc.decode_without_bom_handling(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Decode input bytes to text.
///
/// A UTF-8 byte-order mark is dropped. Valid UTF-8 is taken as is; anything
/// else is transcoded from the detected encoding. Returns the text and the
/// name of the encoding used.
pub fn decode_content(bytes: &[u8]) -> (String, String) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(body) {
        return (text.to_string(), "utf-8".to_string());
    }

    let encoding = detect_encoding(body);
    if encoding_rs::Encoding::for_label(encoding.as_bytes()).is_some() {
        log_warning(format!("Input is not valid UTF-8, decoding as {}", encoding));
        (decode_with(body, &encoding), encoding)
    } else {
        log_warning(format!(
            "Input is not valid UTF-8 and encoding '{}' is unsupported, invalid bytes replaced",
            encoding
        ));
        (String::from_utf8_lossy(body).into_owned(), "utf-8".to_string())
    }
}

/// Parse CSV text into a [`Dataset`].
///
/// The first row names the fields. Rows shorter than the header are padded
/// with empty strings; longer rows are rejected.
///
/// # Example
/// ```ignore
/// use csv2json::parse_csv;
///
/// let dataset = parse_csv("breed,size\nPug,Small", "utf-8").unwrap();
///
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.records[0]["breed"], "Pug");
/// ```
pub fn parse_csv(content: &str, encoding: impl Into<String>) -> CsvResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;

        if row.len() > headers.len() {
            return Err(CsvError::TooManyFields {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                expected: headers.len(),
                found: row.len(),
            });
        }

        records.push(record_from_row(&headers, row.iter()));
    }

    Ok(Dataset {
        headers,
        records,
        encoding: encoding.into(),
    })
}

/// Decode and parse raw CSV bytes.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<Dataset> {
    let (content, encoding) = decode_content(bytes);
    parse_csv(&content, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_simple_csv() {
        let dataset = parse_csv("breed,size\nLabrador,Large\nPug,Small", "utf-8").unwrap();

        assert_eq!(dataset.headers, vec!["breed", "size"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0]["breed"], "Labrador");
        assert_eq!(dataset.records[0]["size"], "Large");
        assert_eq!(dataset.records[1]["breed"], "Pug");
        assert_eq!(dataset.records[1]["size"], "Small");
    }

    #[test]
    fn test_numbers_stay_strings() {
        let dataset = parse_csv("breed,weight\nPug,8", "utf-8").unwrap();

        assert_eq!(dataset.records[0]["weight"], Value::String("8".into()));
    }

    #[test]
    fn test_quoted_values() {
        let csv = "name,notes\n\"Bernese, Mountain\",\"says \"\"woof\"\"\nloudly\"";
        let dataset = parse_csv(csv, "utf-8").unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0]["name"], "Bernese, Mountain");
        assert_eq!(dataset.records[0]["notes"], "says \"woof\"\nloudly");
    }

    #[test]
    fn test_values_not_trimmed() {
        let dataset = parse_csv("a,b\n 1 ,2 ", "utf-8").unwrap();

        assert_eq!(dataset.records[0]["a"], " 1 ");
        assert_eq!(dataset.records[0]["b"], "2 ");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let dataset = parse_csv("a,b\n1,2\n\n3,4\n", "utf-8").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[1]["a"], "3");
    }

    #[test]
    fn test_missing_values_padded() {
        let dataset = parse_csv("a,b,c\n1,,3\n4", "utf-8").unwrap();

        assert_eq!(dataset.records[0]["b"], "");
        assert_eq!(dataset.records[1]["a"], "4");
        assert_eq!(dataset.records[1]["b"], "");
        assert_eq!(dataset.records[1]["c"], "");
    }

    #[test]
    fn test_extra_columns_rejected() {
        let err = parse_csv("a,b\n1,2\n1,2,3,4", "utf-8").unwrap_err();

        match err {
            CsvError::TooManyFields { line, expected, found } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only() {
        let dataset = parse_csv("breed,size\n", "utf-8").unwrap();

        assert_eq!(dataset.headers, vec!["breed", "size"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let dataset = parse_csv("", "utf-8").unwrap();

        assert!(dataset.headers.is_empty());
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("breed,size\nPug,Small".as_bytes());
        let dataset = parse_bytes(&bytes).unwrap();

        assert_eq!(dataset.headers[0], "breed");
        assert_eq!(dataset.encoding, "utf-8");
    }

    #[test]
    fn test_utf8_passthrough() {
        let dataset = parse_bytes("name,origin\nÜber,Zürich".as_bytes()).unwrap();

        assert_eq!(dataset.encoding, "utf-8");
        assert_eq!(dataset.records[0]["name"], "Über");
        assert_eq!(dataset.records[0]["origin"], "Zürich");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        assert_eq!(decode_with(bytes, "iso-8859-1"), "Société");
    }

    #[test]
    fn test_non_utf8_input_does_not_fail() {
        let bytes: &[u8] = b"name,origin\n\xC9pagneul,Fran\xE7ais\n";
        let dataset = parse_bytes(bytes).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_ne!(dataset.encoding, "");
    }

    #[test]
    fn test_detect_encoding_ascii() {
        assert_eq!(detect_encoding(b"breed,size\nPug,Small"), "utf-8");
    }
}
