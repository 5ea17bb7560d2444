//! Listening statistics over a sequence of play events.
//!
//! Every query is a pure function of its input. Running sums stay in
//! milliseconds and are divided into minutes once, when reported. Reported
//! values are truncated to whole minutes (2.9 minutes reports as 2).

use super::grouping::{artist_key, by_rank, group_minutes, song_key, ArtistKey, Group, SongKey};
use crate::parser::schema::{ListeningSummary, PlayEvent, RankedArtist, RankedSong};
use crate::utils::config::{DEFAULT_TOP_N, MS_PER_MINUTE};

/// Total minutes played across all events
///
/// **Public** - 0 for an empty sequence
pub fn total_minutes(events: &[PlayEvent]) -> u64 {
    whole_minutes(events.iter().map(|e| e.ms_played).sum())
}

/// The song with the most summed minutes
///
/// **Public** - `None` when there are no events
///
/// Songs are `(track_name, artist_name)` pairs. On a tie the song whose
/// first play comes earliest in `events` wins.
pub fn top_song(events: &[PlayEvent]) -> Option<RankedSong> {
    group_minutes(events, song_key)
        .into_iter()
        .min_by(by_rank)
        .map(ranked_song)
}

/// The artist with the most summed minutes
///
/// **Public** - same tie-break as `top_song`
pub fn top_artist(events: &[PlayEvent]) -> Option<RankedArtist> {
    group_minutes(events, artist_key)
        .into_iter()
        .min_by(by_rank)
        .map(ranked_artist)
}

/// The `n` songs with the most summed minutes, most played first
///
/// **Public** - returns fewer than `n` when there are fewer distinct songs
pub fn top_n_songs(events: &[PlayEvent], n: usize) -> Vec<RankedSong> {
    let mut groups = group_minutes(events, song_key);
    groups.sort_by(by_rank);

    groups.into_iter().take(n).map(ranked_song).collect()
}

/// `top_n_songs` with the default cutoff of three
pub fn top_songs(events: &[PlayEvent]) -> Vec<RankedSong> {
    top_n_songs(events, DEFAULT_TOP_N)
}

/// Compute every statistic at once
///
/// **Public** - builds the structure handed to output
pub fn summarize(events: &[PlayEvent], top_n: usize) -> ListeningSummary {
    ListeningSummary {
        total_minutes: total_minutes(events),
        top_song: top_song(events),
        top_artist: top_artist(events),
        top_songs: top_n_songs(events, top_n),
    }
}

// Sums are never negative, so floor is truncation toward zero
fn whole_minutes(ms_played: f64) -> u64 {
    (ms_played / MS_PER_MINUTE).floor() as u64
}

fn ranked_song(group: Group<SongKey<'_>>) -> RankedSong {
    let (song, artist) = group.key;
    RankedSong {
        song: song.to_owned(),
        artist: artist.to_owned(),
        minutes: whole_minutes(group.ms_played),
    }
}

fn ranked_artist(group: Group<ArtistKey<'_>>) -> RankedArtist {
    RankedArtist {
        artist: group.key.to_owned(),
        minutes: whole_minutes(group.ms_played),
    }
}
