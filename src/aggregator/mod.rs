//! Aggregation of play events into listening statistics.
//!
//! This module transforms parsed play events into:
//! - Total listening time
//! - Top song and top artist by summed minutes
//! - Top-N songs, most played first

pub mod grouping;
pub mod metrics;

// Re-export main types and functions
pub use grouping::{group_minutes, Group};
pub use metrics::{summarize, top_artist, top_n_songs, top_song, top_songs, total_minutes};
