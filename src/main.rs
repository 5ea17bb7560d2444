//! Listening Stats CLI
//!
//! Reads a music streaming history export and prints or writes
//! total listening time, top song, top artist and top songs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use listening_stats::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_history_file, AnalyzeArgs,
};
use listening_stats::utils::config::DEFAULT_TOP_N;

/// Listening Stats - summary statistics for streaming history
#[derive(Parser, Debug)]
#[command(name = "listening-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a streaming history file
    Analyze {
        /// History export (JSON array or one JSON object per line)
        file: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of top songs to include
        #[arg(short = 'n', long, env = "LISTENING_STATS_TOP", default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Print text summary to stdout (always on without --output)
        #[arg(long)]
        summary: bool,
    },

    /// Check that a history file can be parsed
    Validate {
        /// History export to check
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            file,
            output,
            top,
            summary,
        } => {
            let args = AnalyzeArgs {
                input: file,
                output_json: output,
                top_n: top,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_analyze(&args)?;
        }

        Commands::Validate { file } => {
            validate_history_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
