//! Plain-text rendering of a listening summary.

use crate::parser::schema::{ListeningSummary, RankedSong};

const NAME_WIDTH: usize = 36;

/// Render a summary as a terminal table
///
/// **Public** - used by the analyze command for `--summary`
pub fn render_summary(summary: &ListeningSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  Total listening time: {} minutes", summary.total_minutes));
    lines.push(String::new());

    match &summary.top_song {
        Some(song) => lines.push(format!(
            "  Top song:   {} by {} ({} min)",
            display_name(&song.song),
            display_name(&song.artist),
            song.minutes
        )),
        None => lines.push("  Top song:   -".to_string()),
    }
    match &summary.top_artist {
        Some(artist) => lines.push(format!(
            "  Top artist: {} ({} min)",
            display_name(&artist.artist),
            artist.minutes
        )),
        None => lines.push("  Top artist: -".to_string()),
    }

    lines.push(String::new());
    lines.extend(render_top_songs(&summary.top_songs));

    lines.join("\n")
}

fn render_top_songs(songs: &[RankedSong]) -> Vec<String> {
    let rule = |l: char, m: char, r: char| {
        format!(
            "  {l}{}{m}{}{m}{}{m}{}{r}",
            "━".repeat(5),
            "━".repeat(NAME_WIDTH + 2),
            "━".repeat(NAME_WIDTH + 2),
            "━".repeat(10)
        )
    };

    let mut lines = vec![
        "  TOP SONGS".to_string(),
        rule('┏', '┳', '┓'),
        format!(
            "  ┃ {:>3} ┃ {:<w$} ┃ {:<w$} ┃ {:>8} ┃",
            "#",
            "Song",
            "Artist",
            "MIN",
            w = NAME_WIDTH
        ),
        rule('┣', '╋', '┫'),
    ];

    if songs.is_empty() {
        lines.push(format!(
            "  ┃ {:>3} ┃ {:<w$} ┃ {:<w$} ┃ {:>8} ┃",
            "",
            "(no plays)",
            "",
            "",
            w = NAME_WIDTH
        ));
    }

    for (rank, song) in songs.iter().enumerate() {
        lines.push(format!(
            "  ┃ {:>3} ┃ {:<w$} ┃ {:<w$} ┃ {:>8} ┃",
            rank + 1,
            display_name(&song.song),
            display_name(&song.artist),
            song.minutes,
            w = NAME_WIDTH
        ));
    }

    lines.push(rule('┗', '┻', '┛'));
    lines
}

/// Fit a name into the table column; empty names show as "(unknown)"
fn display_name(name: &str) -> String {
    if name.is_empty() {
        return "(unknown)".to_string();
    }

    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
