//! History parsing and schema definitions.
//!
//! This module handles:
//! - Detecting the document shape (JSON array or line-delimited)
//! - Normalizing raw records into play events
//! - Defining the output report schema

pub mod history;
pub mod schema;

// Re-export main types
pub use history::{parse_history, parse_history_document, to_report, DocumentShape, ParsedHistory};
pub use schema::{ListeningSummary, PlayEvent, RankedArtist, RankedSong, Report};
