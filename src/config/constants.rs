//! Configuration constants.
//!
//! Defaults for query timing, concurrency and retry backoff, plus the
//! identifiers used in plugin output.

/// Name printed at the start of every plugin status line.
pub const PLUGIN_NAME: &str = "CHECK_RBL";

/// Per-query timeout in seconds.
///
/// Applied both to the resolver's own timeout and to the outer timeout layer
/// around each attempt, so a silent list server can never stall the run.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 15;

/// Maximum number of list-server queries in flight at once.
pub const DEFAULT_WORKERS: usize = 20;
/// Upper bound accepted for `--workers`.
pub const MAX_WORKERS: usize = 1000;

/// Number of retries for timed-out or errored queries.
pub const DEFAULT_RETRIES: usize = 0;

// Retry strategy
/// Base for the exponential backoff (delay grows as `base^n * factor` ms).
pub const RETRY_BACKOFF_BASE_MS: u64 = 2;
/// Multiplier applied to each backoff step (first retry waits ~200ms).
pub const RETRY_BACKOFF_FACTOR: u64 = 100;
/// Maximum delay between retries in milliseconds.
pub const RETRY_MAX_DELAY_MS: u64 = 2000;
