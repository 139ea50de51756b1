//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, worker limits, retry backoff)
//! - The built-in list server set
//! - CLI option types and parsing

mod constants;
mod servers;
mod types;

// Re-export all constants
pub use constants::*;
pub use servers::DEFAULT_SERVERS;
pub use types::{Config, LogFormat, LogLevel};
