use listening_stats::aggregator::{summarize, top_artist, top_n_songs, top_song, top_songs, total_minutes};
use listening_stats::parser::{parse_history, PlayEvent, RankedArtist, RankedSong};
use pretty_assertions::assert_eq;
use serde_json::json;

fn song(song: &str, artist: &str, minutes: u64) -> RankedSong {
    RankedSong {
        song: song.to_string(),
        artist: artist.to_string(),
        minutes,
    }
}

fn artist(artist: &str, minutes: u64) -> RankedArtist {
    RankedArtist {
        artist: artist.to_string(),
        minutes,
    }
}

fn scenario_events() -> Vec<PlayEvent> {
    let raw = json!([
        {"trackName": "A", "artistName": "X", "msPlayed": 90000},
        {"trackName": "B", "artistName": "X", "msPlayed": 30000},
        {"trackName": "A", "artistName": "X", "msPlayed": 30000}
    ])
    .to_string();

    parse_history(raw.as_bytes()).unwrap()
}

#[test]
fn test_scenario() {
    let events = scenario_events();

    assert_eq!(total_minutes(&events), 2);
    assert_eq!(top_song(&events), Some(song("A", "X", 2)));
    assert_eq!(top_artist(&events), Some(artist("X", 2)));
    assert_eq!(top_n_songs(&events, 3), vec![song("A", "X", 2), song("B", "X", 0)]);
}

#[test]
fn test_empty_events() {
    let events: Vec<PlayEvent> = Vec::new();

    assert_eq!(total_minutes(&events), 0);
    assert_eq!(top_song(&events), None);
    assert_eq!(top_artist(&events), None);
    assert!(top_n_songs(&events, 3).is_empty());
}

#[test]
fn test_truncation_not_rounding() {
    // 174000 ms = 2.9 minutes
    let events = vec![PlayEvent::from_ms("A", "X", 174000.0)];

    assert_eq!(total_minutes(&events), 2);
    assert_eq!(top_song(&events).unwrap().minutes, 2);
    assert_eq!(top_artist(&events).unwrap().minutes, 2);
    assert_eq!(top_songs(&events)[0].minutes, 2);
}

#[test]
fn test_sums_before_truncating() {
    // Each play is 0.75 minutes; truncating per play would report 0
    let events = vec![
        PlayEvent::new("A", "X", 0.75),
        PlayEvent::new("A", "X", 0.75),
        PlayEvent::new("B", "Y", 0.75),
    ];

    assert_eq!(total_minutes(&events), 2);
    assert_eq!(top_song(&events), Some(song("A", "X", 1)));
}

#[test]
fn test_many_short_plays_add_up_exactly() {
    // Ten plays of 6000 ms are exactly one minute
    let raw = serde_json::Value::Array(
        (0..10)
            .map(|_| json!({"trackName": "A", "artistName": "X", "msPlayed": 6000}))
            .collect(),
    )
    .to_string();
    let events = parse_history(raw.as_bytes()).unwrap();

    assert_eq!(total_minutes(&events), 1);
    assert_eq!(top_song(&events), Some(song("A", "X", 1)));
    assert_eq!(top_artist(&events), Some(artist("X", 1)));
    assert_eq!(top_n_songs(&events, 3), vec![song("A", "X", 1)]);
}

#[test]
fn test_mixed_fractional_plays_add_up_exactly() {
    // 20000.5 + 19999.5 + 7000 + 13000 = 60000 ms
    let raw = json!([
        {"trackName": "A", "artistName": "X", "msPlayed": 20000.5},
        {"trackName": "A", "artistName": "X", "msPlayed": 19999.5},
        {"trackName": "B", "artistName": "X", "msPlayed": 7000},
        {"trackName": "B", "artistName": "X", "msPlayed": 13000}
    ])
    .to_string();
    let events = parse_history(raw.as_bytes()).unwrap();

    assert_eq!(total_minutes(&events), 1);
    assert_eq!(top_artist(&events), Some(artist("X", 1)));
    assert_eq!(top_n_songs(&events, 3), vec![song("A", "X", 0), song("B", "X", 0)]);
}

#[test]
fn test_thirds_of_a_minute_per_song() {
    // 20000 ms is a third of a minute; three per song make one minute each
    let events: Vec<PlayEvent> = ["A", "B", "A", "B", "A", "B"]
        .iter()
        .map(|track| PlayEvent::from_ms(*track, "X", 20000.0))
        .collect();

    assert_eq!(total_minutes(&events), 2);
    assert_eq!(top_n_songs(&events, 3), vec![song("A", "X", 1), song("B", "X", 1)]);
    assert_eq!(top_artist(&events), Some(artist("X", 2)));
}

#[test]
fn test_missing_duration_counts_as_zero() {
    let raw = json!([
        {"trackName": "A", "artistName": "X", "msPlayed": 120000},
        {"trackName": "B", "artistName": "Y"}
    ])
    .to_string();
    let events = parse_history(raw.as_bytes()).unwrap();

    assert_eq!(total_minutes(&events), 2);
    assert_eq!(top_n_songs(&events, 3), vec![song("A", "X", 2), song("B", "Y", 0)]);
}

#[test]
fn test_top_artist_spans_songs() {
    let events = vec![
        PlayEvent::new("Long", "Solo", 5.0),
        PlayEvent::new("One", "Band", 2.0),
        PlayEvent::new("Two", "Band", 2.0),
        PlayEvent::new("Three", "Band", 2.0),
    ];

    assert_eq!(top_song(&events), Some(song("Long", "Solo", 5)));
    assert_eq!(top_artist(&events), Some(artist("Band", 6)));
}

#[test]
fn test_same_title_different_artists_are_different_songs() {
    let events = vec![
        PlayEvent::new("Intro", "X", 2.0),
        PlayEvent::new("Intro", "Y", 3.0),
    ];

    assert_eq!(top_n_songs(&events, 3), vec![song("Intro", "Y", 3), song("Intro", "X", 2)]);
}

#[test]
fn test_ties_break_by_first_occurrence() {
    let events = vec![
        PlayEvent::new("Zulu", "Z", 1.0),
        PlayEvent::new("Alpha", "A", 2.0),
        PlayEvent::new("Zulu", "Z", 1.0),
        PlayEvent::new("Mike", "M", 2.0),
    ];

    assert_eq!(top_song(&events), Some(song("Zulu", "Z", 2)));
    assert_eq!(top_artist(&events), Some(artist("Z", 2)));
    assert_eq!(
        top_n_songs(&events, 3),
        vec![song("Zulu", "Z", 2), song("Alpha", "A", 2), song("Mike", "M", 2)]
    );
    assert_eq!(top_n_songs(&events, 2), vec![song("Zulu", "Z", 2), song("Alpha", "A", 2)]);
}

#[test]
fn test_top_n_bounds() {
    let events = scenario_events();

    assert!(top_n_songs(&events, 0).is_empty());
    assert_eq!(top_n_songs(&events, 1), vec![song("A", "X", 2)]);
    assert_eq!(top_n_songs(&events, 10).len(), 2);
}

#[test]
fn test_top_songs_default_cutoff() {
    let events: Vec<PlayEvent> = (1..=5)
        .map(|i| PlayEvent::new(format!("Song {}", i), "X", i as f64))
        .collect();

    assert_eq!(
        top_songs(&events),
        vec![song("Song 5", "X", 5), song("Song 4", "X", 4), song("Song 3", "X", 3)]
    );
}

#[test]
fn test_top_n_is_sorted_and_excludes_only_smaller() {
    let events = vec![
        PlayEvent::new("a", "1", 4.0),
        PlayEvent::new("b", "1", 9.0),
        PlayEvent::new("c", "2", 1.0),
        PlayEvent::new("d", "2", 7.0),
        PlayEvent::new("a", "1", 4.0),
        PlayEvent::new("e", "3", 0.5),
    ];

    let top = top_n_songs(&events, 3);

    assert_eq!(top, vec![song("b", "1", 9), song("a", "1", 8), song("d", "2", 7)]);
    assert!(top.windows(2).all(|w| w[0].minutes >= w[1].minutes));
}

#[test]
fn test_queries_are_idempotent() {
    let events = scenario_events();

    assert_eq!(summarize(&events, 3), summarize(&events, 3));
    assert_eq!(top_song(&events), top_song(&events));
}

#[test]
fn test_batch_and_line_delimited_agree() {
    let records = [
        json!({"trackName": "A", "artistName": "X", "msPlayed": 90000}),
        json!({"trackName": "B", "artistName": "Y", "msPlayed": 45000}),
        json!({"trackName": "A", "artistName": "X"}),
        json!({"artistName": "Y", "msPlayed": 200000}),
    ];

    let batch = serde_json::Value::Array(records.to_vec()).to_string();
    let lines = records.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("\n");

    let from_batch = parse_history(batch.as_bytes()).unwrap();
    let from_lines = parse_history(lines.as_bytes()).unwrap();

    assert_eq!(summarize(&from_batch, 3), summarize(&from_lines, 3));
}

#[test]
fn test_summarize() {
    let summary = summarize(&scenario_events(), 1);

    assert_eq!(summary.total_minutes, 2);
    assert_eq!(summary.top_song, Some(song("A", "X", 2)));
    assert_eq!(summary.top_artist, Some(artist("X", 2)));
    assert_eq!(summary.top_songs, vec![song("A", "X", 2)]);
}
