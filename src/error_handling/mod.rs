//! Error handling and outcome statistics.
//!
//! This module provides:
//! - Error type definitions (configuration, initialization, query names, checks)
//! - Per-kind outcome statistics for list-server queries
//!
//! Errors that reach the binary end the run as UNKNOWN. Per-query failures are
//! never errors at this level; they are outcomes, counted in `OutcomeStats`.

mod stats;
mod types;

// Re-export public API
pub use stats::{OutcomeKind, OutcomeStats};
pub use types::{CheckError, ConfigError, InitializationError, QueryNameError};
