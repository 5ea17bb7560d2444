//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the history file into memory
//! 2. Parses it into play events
//! 3. Computes listening statistics
//! 4. Writes the JSON report and/or prints a summary

use super::models::AnalyzeArgs;
use crate::aggregator::summarize;
use crate::output::{render_summary, write_report};
use crate::parser::{parse_history_document, to_report, Report};
use crate::utils::config::MAX_TOP_N;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written or printed
///
/// # Errors
/// * File read failures
/// * `MalformedInputError` when the file is not a supported history export
/// * Report write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Analyzing listening history: {}", args.input.display());

    info!("Step 1/4: Reading history file...");
    let raw = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    debug!("Read {} bytes", raw.len());

    info!("Step 2/4: Parsing play events...");
    let history = parse_history_document(&raw)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    debug!("Parsed {} events from {} document", history.events.len(), history.shape);

    info!("Step 3/4: Computing statistics (top {} songs)...", args.top_n);
    let summary = summarize(&history.events, args.top_n);

    if let Some(song) = &summary.top_song {
        debug!("Top song: {} by {} ({} min)", song.song, song.artist, song.minutes);
    }

    info!("Step 4/4: Writing output...");
    let report = to_report(&args.input.display().to_string(), &history, summary);

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.shows_summary() {
        println!("\n{}", "=".repeat(80));
        println!("LISTENING SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", report.source);
        println!("Plays:  {}", report.event_count);
        println!("\n{}", render_summary(&report.summary));
        println!("{}", "=".repeat(80));
    }

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}
