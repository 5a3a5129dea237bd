//! Dataset text parsing
//!
//! A dataset is either a single JSON array of records or newline-delimited
//! JSON with one record per line. Array input must be valid as a whole;
//! line-delimited input is parsed line by line and malformed lines are skipped.

use log::{debug, warn};
use serde_json::Value;

use crate::config::DEFAULT_LINE_PREVIEW_CHARS;
use crate::error::{MunicipalDataError, Result};
use crate::models::MunicipioRawData;

/// Outcome of parsing a dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    /// Records in input order
    pub records: Vec<MunicipioRawData>,
    /// Array elements or lines that were dropped
    pub skipped: usize,
}

/// The textual shape detected for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    JsonArray,
    JsonLines,
}

/// Detect the shape of a dataset from its trimmed content
#[must_use]
pub fn detect_shape(content: &str) -> InputShape {
    let trimmed = content.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        InputShape::JsonArray
    } else {
        InputShape::JsonLines
    }
}

/// Parse a dataset with the default warning preview length
pub fn parse_records(content: &str) -> Result<ParsedRecords> {
    parse_records_with_preview(content, DEFAULT_LINE_PREVIEW_CHARS)
}

/// Parse a dataset
///
/// # Arguments
/// * `content` - The full dataset text
/// * `preview_chars` - How many characters of a rejected line to log
///
/// # Errors
/// Returns an error if the input is blank, if a JSON array is malformed, or if
/// no line of line-delimited input yields a record.
pub fn parse_records_with_preview(content: &str, preview_chars: usize) -> Result<ParsedRecords> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(MunicipalDataError::EmptyInput(
            "dataset contains no records".to_string(),
        ));
    }

    match detect_shape(trimmed) {
        InputShape::JsonArray => parse_array(trimmed),
        InputShape::JsonLines => parse_lines(trimmed, preview_chars),
    }
}

fn parse_array(content: &str) -> Result<ParsedRecords> {
    let values: Vec<Value> = serde_json::from_str(content)?;

    let mut parsed = ParsedRecords {
        records: Vec::with_capacity(values.len()),
        skipped: 0,
    };

    for (index, value) in values.into_iter().enumerate() {
        match MunicipioRawData::from_value(value) {
            Some(record) => parsed.records.push(record),
            None => {
                warn!("Skipping array element {index}: not a JSON object");
                parsed.skipped += 1;
            }
        }
    }

    debug!(
        "Parsed JSON array: {} records, {} skipped",
        parsed.records.len(),
        parsed.skipped
    );
    Ok(parsed)
}

fn parse_lines(content: &str, preview_chars: usize) -> Result<ParsedRecords> {
    let mut parsed = ParsedRecords::default();

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let record = serde_json::from_str::<Value>(line)
            .ok()
            .and_then(MunicipioRawData::from_value);

        match record {
            Some(record) => parsed.records.push(record),
            None => {
                warn!("Failed to parse line: {}", preview(line, preview_chars));
                parsed.skipped += 1;
            }
        }
    }

    if parsed.records.is_empty() {
        return Err(MunicipalDataError::InvalidFormat(format!(
            "neither a JSON array nor line-delimited JSON ({} lines rejected)",
            parsed.skipped
        )));
    }

    debug!(
        "Parsed line-delimited JSON: {} records, {} lines skipped",
        parsed.records.len(),
        parsed.skipped
    );
    Ok(parsed)
}

fn preview(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}
