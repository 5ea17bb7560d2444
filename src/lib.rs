//! Listening Stats
//!
//! Summary statistics from music streaming history exports.
//!
//! A history file is a JSON array of play objects, or one JSON object per
//! line, each with `trackName`, `artistName` and `msPlayed`. From it we
//! compute total listening time, the top song, the top artist, and the
//! top-N songs.
//!
//! ```ignore
//! use listening_stats::{aggregator::summarize, parser::parse_history};
//!
//! let events = parse_history(&std::fs::read("StreamingHistory0.json")?)?;
//! let summary = summarize(&events, 3);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use utils::error::MalformedInputError;
