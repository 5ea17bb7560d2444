use std::path::PathBuf;
use crate::utils::config::DEFAULT_TOP_N;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Streaming history export to read
    pub input: PathBuf,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Number of top songs to include
    pub top_n: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: None,
            top_n: DEFAULT_TOP_N,
            print_summary: false,
        }
    }
}

impl AnalyzeArgs {
    /// Whether to print the text summary
    ///
    /// Without a report file the summary is the only output, so it is always shown.
    pub fn shows_summary(&self) -> bool {
        self.print_summary || self.output_json.is_none()
    }
}
