//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid option values or combinations.
///
/// All of these are detected before any DNS query is issued.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The critical boundary is below the warning boundary.
    #[error("critical boundary ({critical}) must not be below warning boundary ({warning})")]
    ThresholdOrder {
        /// Configured warning boundary
        warning: usize,
        /// Configured critical boundary
        critical: usize,
    },

    /// Worker count outside `1..=max`.
    #[error("worker count must be between 1 and {max}, got {got}")]
    Workers {
        /// Value supplied
        got: usize,
        /// Largest accepted value
        max: usize,
    },

    /// A zero per-query timeout would time out every query.
    #[error("query timeout must be at least one second")]
    ZeroQueryTimeout,

    /// The host to check is blank.
    #[error("host must not be empty")]
    EmptyHost,

    /// Servers were supplied but none were usable.
    #[error("no list servers configured")]
    NoServers,

    /// The servers file could not be read.
    #[error("failed to read servers file {}: {source}", .path.display())]
    ServersFile {
        /// Path given with `--servers-file`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors building a list-server query name.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryNameError {
    /// Reversed-octet lists only cover IPv4.
    #[error("{0} is an IPv6 address; reversed-octet list lookups support IPv4 only")]
    UnsupportedAddress(String),
}

/// Errors that end a check with an UNKNOWN result.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Invalid configuration, detected before any query.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resolved address cannot be turned into list queries.
    #[error(transparent)]
    QueryName(#[from] QueryNameError),

    /// The engine or aggregator lost track of a query.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::ThresholdOrder {
            warning: 2,
            critical: 1,
        };
        assert_eq!(
            err.to_string(),
            "critical boundary (1) must not be below warning boundary (2)"
        );

        let err = ConfigError::ServersFile {
            path: PathBuf::from("/tmp/servers.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/servers.txt"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_check_error_is_transparent_over_config() {
        let err = CheckError::from(ConfigError::NoServers);
        assert_eq!(err.to_string(), "no list servers configured");

        let err = CheckError::from(QueryNameError::UnsupportedAddress("2001:db8::1".into()));
        assert!(err.to_string().starts_with("2001:db8::1 is an IPv6 address"));
    }
}
