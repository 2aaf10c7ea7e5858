//! Input record reading
//!
//! Supports delimited text with a header row (csv), a JSON array of record
//! objects (json), and newline-delimited JSON objects (jsonl). Parsing stops
//! at deserialization; field values are passed to the formatter untouched.

use super::record::RawRecord;
use crate::domain::{MatchprepError, Result};
use std::fs;
use std::path::Path;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Delimited text with a header row naming the record columns
    Csv,
    /// A single JSON array of record objects
    Json,
    /// One JSON record object per line
    Jsonl,
}

impl InputFormat {
    /// Parse a format name as used in config files and CLI flags
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            "jsonl" | "ndjson" => Ok(InputFormat::Jsonl),
            other => Err(MatchprepError::Configuration(format!(
                "unsupported input format '{other}', expected 'csv', 'json', or 'jsonl'"
            ))),
        }
    }

    /// Infer the format from a file extension
    pub fn infer(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_lowercase().as_str() {
            "csv" | "tsv" | "txt" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            "jsonl" | "ndjson" => Ok(InputFormat::Jsonl),
            _ => Err(MatchprepError::Configuration(format!(
                "cannot infer input format from '{}', specify one explicitly",
                path.display()
            ))),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::Json => write!(f, "json"),
            InputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Read all raw records from an input file
///
/// # Errors
///
/// Returns [`MatchprepError::Io`] if the file cannot be read and
/// [`MatchprepError::Serialization`] if a row or object fails to
/// deserialize. Malformed *values* are not detected here; that is the
/// formatter's job.
pub fn read_records(path: &Path, format: InputFormat) -> Result<Vec<RawRecord>> {
    match format {
        InputFormat::Csv => read_csv(path),
        InputFormat::Json => read_json(path),
        InputFormat::Jsonl => read_jsonl(path),
    }
}

fn read_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }
    Ok(records)
}

fn read_json(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = fs::read_to_string(path)?;
    let records: Vec<RawRecord> = serde_json::from_str(&contents)?;
    Ok(records)
}

fn read_jsonl(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let record: RawRecord = serde_json::from_str(line)?;
        records.push(record);
    }
    Ok(records)
}
