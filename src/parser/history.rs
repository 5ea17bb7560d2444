//! Streaming history parser.
//!
//! Accepts the raw bytes of an export file in one of two shapes:
//! - a single JSON array of play objects (batch document)
//! - one JSON object per line (line-delimited document)
//!
//! The batch shape is tried first; on a syntax or shape failure the buffer
//! is re-read line by line. Field errors inside a well-shaped document are
//! fatal and never trigger the fallback.

use super::schema::{ListeningSummary, PlayEvent, Report};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::MalformedInputError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

type Record = Map<String, Value>;

/// Which of the two accepted shapes a buffer turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentShape {
    /// Single JSON array of objects
    Batch,
    /// One JSON object per non-empty line
    LineDelimited,
}

impl DocumentShape {
    /// Describe where a record sits, for error messages
    ///
    /// Batch positions are array indices, line-delimited positions are 1-based line numbers.
    fn locate(self, position: usize) -> String {
        match self {
            DocumentShape::Batch => format!("element {}", position),
            DocumentShape::LineDelimited => format!("line {}", position),
        }
    }
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentShape::Batch => f.write_str("JSON array"),
            DocumentShape::LineDelimited => f.write_str("newline-delimited JSON"),
        }
    }
}

/// Parsed history (internal representation)
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHistory {
    pub shape: DocumentShape,
    pub events: Vec<PlayEvent>,
}

/// Parse a raw history buffer into play events
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `MalformedInputError` - buffer matches neither shape, or a record field has the wrong type
pub fn parse_history(raw: &[u8]) -> Result<Vec<PlayEvent>, MalformedInputError> {
    parse_history_document(raw).map(|history| history.events)
}

/// Parse a raw history buffer, keeping the detected document shape
///
/// **Public** - used by commands that report on the input format
///
/// An empty array, an empty buffer, or a buffer of blank lines yields no events.
pub fn parse_history_document(raw: &[u8]) -> Result<ParsedHistory, MalformedInputError> {
    let (shape, records) = match parse_batch(raw) {
        Ok(records) => (DocumentShape::Batch, records),
        Err(batch_err) => {
            let records = parse_line_delimited(raw).map_err(|line_err| {
                MalformedInputError::new(format!(
                    "not a JSON array of objects ({}) nor newline-delimited JSON objects ({})",
                    batch_err, line_err
                ))
            })?;
            (DocumentShape::LineDelimited, records)
        }
    };

    let events = records
        .into_iter()
        .map(|(position, record)| to_event(shape, position, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedHistory { shape, events })
}

/// Attempt the batch shape
///
/// **Private** - first parse strategy
fn parse_batch(raw: &[u8]) -> Result<Vec<(usize, Record)>, serde_json::Error> {
    let records: Vec<Record> = serde_json::from_slice(raw)?;
    Ok(records.into_iter().enumerate().collect())
}

/// Attempt the line-delimited shape
///
/// **Private** - fallback parse strategy. Blank lines are skipped.
fn parse_line_delimited(raw: &[u8]) -> Result<Vec<(usize, Record)>, String> {
    let text = std::str::from_utf8(raw).map_err(|e| format!("input is not valid UTF-8: {}", e))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let line_no = index + 1;
            serde_json::from_str::<Record>(line)
                .map(|record| (line_no, record))
                .map_err(|e| format!("line {}: {}", line_no, e))
        })
        .collect()
}

/// Normalize one raw record
///
/// **Private** - extraction of `trackName`, `artistName` and `msPlayed`
fn to_event(shape: DocumentShape, position: usize, record: Record) -> Result<PlayEvent, MalformedInputError> {
    serde_json::from_value(Value::Object(record))
        .map_err(|e| MalformedInputError::new(format!("{}: {}", shape.locate(position), e)))
}

/// Wrap a summary into the report written to disk
///
/// **Public** - used by commands to create final output
pub fn to_report(source: &str, history: &ParsedHistory, summary: ListeningSummary) -> Report {
    use chrono::Utc;

    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        event_count: history.events.len(),
        generated_at: Utc::now().to_rfc3339(),
        summary,
    }
}
