use anyhow::{Context, Result};
use std::path::Path;
use crate::parser::{parse_history_document, ParsedHistory};
use crate::utils::config::REPORT_SCHEMA_VERSION;

/// Check that a history file parses, and report what was found
pub fn validate_history_file(file_path: &Path) -> Result<ParsedHistory> {
    println!("Validating history: {}", file_path.display());

    let raw = std::fs::read(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let history = parse_history_document(&raw)?;

    println!("✓ Valid listening history");
    println!("  Format: {}", history.shape);
    println!("  Plays:  {}", history.events.len());

    Ok(history)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Listening Stats Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - History file that was analyzed");
        println!("  event_count: number      - Number of play events parsed");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  summary: object");
        println!("    total_minutes: number  - Whole minutes played");
        println!("    top_song: object?      - Most played song (null if no plays)");
        println!("      song: string");
        println!("      artist: string");
        println!("      minutes: number");
        println!("    top_artist: object?    - Most played artist (null if no plays)");
        println!("      artist: string");
        println!("      minutes: number");
        println!("    top_songs: array       - Most played songs, descending");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Listening Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Summary statistics from music streaming history exports.");
}
