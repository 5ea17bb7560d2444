//! Group play events by key and sum their play time.
//!
//! Sums are kept in milliseconds, which add exactly, and only converted to
//! minutes when reported. Grouping makes no ordering promise. Callers rank
//! the groups explicitly with `by_rank`: summed play time descending, then
//! the position of each group's first event in the input, earliest first.

use crate::parser::PlayEvent;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Song identity: `(track_name, artist_name)`, compared exactly
pub type SongKey<'a> = (&'a str, &'a str);

/// Artist identity: `artist_name`, compared exactly
pub type ArtistKey<'a> = &'a str;

/// One grouped total
///
/// **Public** - used by metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K> {
    pub key: K,

    /// Sum of `ms_played` over every event with this key
    pub ms_played: f64,

    /// Index of the first event with this key
    pub first_seen: usize,
}

/// Sum play time per key
///
/// **Public** - main entry point for grouping
///
/// Returns one group per distinct key, in unspecified order.
pub fn group_minutes<'a, K, F>(events: &'a [PlayEvent], key_of: F) -> Vec<Group<K>>
where
    K: Eq + Hash + Copy,
    F: Fn(&'a PlayEvent) -> K,
{
    let mut groups: HashMap<K, Group<K>> = HashMap::new();

    for (index, event) in events.iter().enumerate() {
        let key = key_of(event);
        groups
            .entry(key)
            .or_insert(Group {
                key,
                ms_played: 0.0,
                first_seen: index,
            })
            .ms_played += event.ms_played;
    }

    groups.into_values().collect()
}

pub fn song_key(event: &PlayEvent) -> SongKey<'_> {
    (event.track_name.as_str(), event.artist_name.as_str())
}

pub fn artist_key(event: &PlayEvent) -> ArtistKey<'_> {
    event.artist_name.as_str()
}

/// Ranking order: more play time first, ties go to the key seen first
///
/// `first_seen` is unique per group, so this is a total order.
pub fn by_rank<K>(a: &Group<K>, b: &Group<K>) -> Ordering {
    b.ms_played
        .total_cmp(&a.ms_played)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<K>(mut groups: Vec<Group<K>>) -> Vec<Group<K>> {
        groups.sort_by(by_rank);
        groups
    }

    #[test]
    fn test_group_by_song() {
        let events = vec![
            PlayEvent::new("A", "X", 1.5),
            PlayEvent::new("B", "X", 0.5),
            PlayEvent::new("A", "X", 0.5),
        ];

        let groups = sorted(group_minutes(&events, song_key));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, ("A", "X"));
        assert_eq!(groups[0].ms_played, 120_000.0);
        assert_eq!(groups[0].first_seen, 0);
        assert_eq!(groups[1].key, ("B", "X"));
        assert_eq!(groups[1].first_seen, 1);
    }

    #[test]
    fn test_same_track_different_artist_is_distinct() {
        let events = vec![PlayEvent::new("A", "X", 1.0), PlayEvent::new("A", "Y", 1.0)];

        assert_eq!(group_minutes(&events, song_key).len(), 2);
        assert_eq!(group_minutes(&events, artist_key).len(), 2);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let events = vec![
            PlayEvent::new("a", "x", 1.0),
            PlayEvent::new("A", "X", 1.0),
            PlayEvent::new("A ", "X", 1.0),
        ];

        assert_eq!(group_minutes(&events, song_key).len(), 3);
    }

    #[test]
    fn test_by_rank_tie_uses_first_seen() {
        let early = Group {
            key: "late-name",
            ms_played: 180_000.0,
            first_seen: 0,
        };
        let late = Group {
            key: "early-name",
            ms_played: 180_000.0,
            first_seen: 5,
        };

        assert_eq!(by_rank(&early, &late), Ordering::Less);
        assert_eq!(by_rank(&late, &early), Ordering::Greater);
    }

    #[test]
    fn test_sums_whole_milliseconds() {
        let events: Vec<PlayEvent> = (0..10)
            .map(|_| PlayEvent::from_ms("A", "X", 6000.0))
            .collect();

        let groups = group_minutes(&events, song_key);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].ms_played, 60_000.0);
    }

    #[test]
    fn test_empty_events() {
        let events: Vec<PlayEvent> = Vec::new();
        assert!(group_minutes(&events, artist_key).is_empty());
    }
}
