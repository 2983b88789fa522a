// Reading raw sales files, writing the normalized file, and loading it back
use chrono::NaiveDate;
use csv::StringRecord;
use std::path::Path;

use crate::error::{EngineError, Result};

pub mod formatter;
pub mod raw_parser;
pub mod sales_table;

/// Date layout used by both the raw and the normalized files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Position of `name` in the header row; header names are compared case-insensitively.
pub(crate) fn require_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| EngineError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded months and days ("2021-1-5"), so the text must also
/// round-trip through `DATE_FORMAT` unchanged.
pub(crate) fn parse_date(text: &str) -> std::result::Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| format!("'{}': {}", text, e))?;
    if date.format(DATE_FORMAT).to_string() != text {
        return Err(format!("'{}' is not in YYYY-MM-DD form", text));
    }
    Ok(date)
}

// 1-based line where `record` starts in `source`.
// The reader positions a record right after the previous one, so blank lines
// in between are counted here.
pub(crate) fn record_line(record: &StringRecord, source: &[u8]) -> u64 {
    let Some(pos) = record.position() else {
        return 0;
    };
    let blank_lines = source
        .get(pos.byte() as usize..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| matches!(b, b'\n' | b'\r'))
        .filter(|b| **b == b'\n')
        .count();
    pos.line() + blank_lines as u64
}
