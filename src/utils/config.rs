//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Number of songs reported by `top_n_songs` when no count is given
pub const DEFAULT_TOP_N: usize = 3;

/// Upper bound on `--top` accepted by the CLI
pub const MAX_TOP_N: usize = 1000;

pub const MS_PER_MINUTE: f64 = 60_000.0;
