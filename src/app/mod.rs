//! Output and diagnostics for a finished check.
//!
//! This module provides the plugin status line and JSON rendering used by the
//! binary, and the outcome statistics logged at the end of a run.

pub mod report;
pub mod statistics;

// Re-export public API
pub use report::{render_failure, render_json, render_status_line};
pub use statistics::log_outcome_statistics;
