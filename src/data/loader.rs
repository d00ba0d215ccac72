use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::{UTF_8, WINDOWS_1252};

use super::error::DataError;
use super::model::RawTable;

/// Cell texts treated as missing values, on top of the empty string.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse a CSV file from disk.
pub fn load_file(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let table = parse_csv(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

/// Parse an uploaded byte stream as comma-separated text with a header row.
///
/// The schema is not validated here; whatever columns the file has are kept.
pub fn parse_csv(bytes: &[u8]) -> Result<RawTable, DataError> {
    let text = decode(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(DataError::Empty);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(DataError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }

        // Short rows are padded with missing cells.
        let mut row: Vec<Option<String>> = record.iter().map(parse_cell).collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    Ok(RawTable { columns, rows })
}

/// Decode bytes as UTF-8 when valid, falling back to the Latin-1 family
/// (windows-1252) otherwise. Never fails: every byte maps to a character.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            log::debug!("input is not valid UTF-8, decoding as windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}

fn parse_cell(s: &str) -> Option<String> {
    if s.is_empty() || MISSING_MARKERS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}
