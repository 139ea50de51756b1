//! Outcome statistics tracking.
//!
//! Counts every classified list-server outcome by kind so diagnostics can
//! summarize a run, including the query errors that never reach the report.

use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// Kinds of list-server outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeKind {
    /// The list returned an address for the query name.
    Present,
    /// No data or NXDOMAIN.
    Absent,
    /// No terminal reply within the timeout.
    TimedOut,
    /// Any other terminal failure.
    QueryError,
}

impl OutcomeKind {
    /// Human-readable label used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Present => "present",
            OutcomeKind::Absent => "absent",
            OutcomeKind::TimedOut => "timed out",
            OutcomeKind::QueryError => "query error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind outcome counters for one run.
///
/// Only mutated from completion handlers, which never run concurrently, so
/// plain counters suffice.
#[derive(Debug, Clone)]
pub struct OutcomeStats {
    counts: HashMap<OutcomeKind, usize>,
}

impl Default for OutcomeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeStats {
    pub fn new() -> Self {
        let counts = OutcomeKind::iter().map(|kind| (kind, 0)).collect();
        OutcomeStats { counts }
    }

    /// Increment the counter for `kind`.
    pub fn record(&mut self, kind: OutcomeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Get the count for an outcome kind.
    pub fn get(&self, kind: OutcomeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total outcomes recorded across all kinds.
    pub fn total(&self) -> usize {
        OutcomeKind::iter().map(|kind| self.get(kind)).sum()
    }
}
