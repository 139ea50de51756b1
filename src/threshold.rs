//! Threshold evaluation and plugin status codes.

use std::fmt;

use serde::Serialize;

use crate::error_handling::ConfigError;

/// Monitoring-plugin status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Process exit code for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning and critical boundaries on the listed count.
///
/// A count strictly above a boundary trips it, so `0/0` flags any listing
/// as CRITICAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    warning: usize,
    critical: usize,
}

impl Thresholds {
    /// # Errors
    ///
    /// Returns `ConfigError::ThresholdOrder` when `critical < warning`.
    pub fn new(warning: usize, critical: usize) -> Result<Self, ConfigError> {
        if critical < warning {
            return Err(ConfigError::ThresholdOrder { warning, critical });
        }
        Ok(Self { warning, critical })
    }

    pub fn warning(&self) -> usize {
        self.warning
    }

    pub fn critical(&self) -> usize {
        self.critical
    }

    /// Maps a listed count to a status.
    pub fn evaluate(&self, listed_count: usize) -> Status {
        if listed_count > self.critical {
            Status::Critical
        } else if listed_count > self.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}
