//! Record and report schema definitions.
//!
//! `PlayEvent` is the normalized record the aggregator works on.
//! The ranked and report types define the JSON we write to disk.
//! Report schema is versioned to allow future evolution.

use crate::utils::config::MS_PER_MINUTE;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One listening occurrence from a streaming history export
///
/// Built once from a raw record and never modified afterwards.
/// Missing names become empty strings; a missing `msPlayed` becomes 0 minutes.
///
/// `ms_played` is kept next to `duration_minutes` so totals can be summed
/// in whole milliseconds and divided once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPlayEvent")]
pub struct PlayEvent {
    pub track_name: String,
    pub artist_name: String,
    pub ms_played: f64,
    pub duration_minutes: f64,
}

impl PlayEvent {
    pub fn new(track_name: impl Into<String>, artist_name: impl Into<String>, duration_minutes: f64) -> Self {
        Self::from_ms(track_name, artist_name, duration_minutes * MS_PER_MINUTE)
    }

    /// Build an event from a millisecond play count
    pub fn from_ms(track_name: impl Into<String>, artist_name: impl Into<String>, ms_played: f64) -> Self {
        Self {
            track_name: track_name.into(),
            artist_name: artist_name.into(),
            ms_played,
            duration_minutes: ms_played / MS_PER_MINUTE,
        }
    }
}

/// Record as it appears in the export
///
/// Only these three keys are read, by exact name. `null` counts as missing.
#[derive(Debug, Deserialize)]
struct RawPlayEvent {
    #[serde(rename = "trackName", default)]
    track_name: Option<String>,

    #[serde(rename = "artistName", default)]
    artist_name: Option<String>,

    #[serde(rename = "msPlayed", default, deserialize_with = "non_negative_ms")]
    ms_played: Option<f64>,
}

impl From<RawPlayEvent> for PlayEvent {
    fn from(raw: RawPlayEvent) -> Self {
        Self::from_ms(
            raw.track_name.unwrap_or_default(),
            raw.artist_name.unwrap_or_default(),
            raw.ms_played.unwrap_or(0.0),
        )
    }
}

fn non_negative_ms<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(de)? {
        Some(ms) if ms < 0.0 => Err(de::Error::custom(format!(
            "msPlayed must be non-negative, found {}",
            ms
        ))),
        ms => Ok(ms),
    }
}

/// A song with its summed play time, truncated to whole minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSong {
    pub song: String,
    pub artist: String,
    pub minutes: u64,
}

/// An artist with its summed play time, truncated to whole minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedArtist {
    pub artist: String,
    pub minutes: u64,
}

/// Everything computed from one history file
///
/// `top_song` and `top_artist` are `None` (serialized as `null`) when there are no events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListeningSummary {
    pub total_minutes: u64,
    pub top_song: Option<RankedSong>,
    pub top_artist: Option<RankedArtist>,
    pub top_songs: Vec<RankedSong>,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// File the history was read from
    pub source: String,

    /// Number of play events parsed
    pub event_count: usize,

    /// Timestamp when report was generated
    pub generated_at: String,

    pub summary: ListeningSummary,
}
