//! CLI command implementations.
//!
//! Commands orchestrate the parser, aggregator and output components.

pub mod analyze;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args};
pub use models::AnalyzeArgs;
pub use utils::{display_schema, display_version, validate_history_file};
