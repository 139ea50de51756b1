//! Folding list-server outcomes into the run's result set.

use std::fmt;

use log::{debug, info, warn};
use serde::Serialize;

use super::classify::Outcome;
use crate::engine::PhaseStats;
use crate::error_handling::{CheckError, OutcomeStats};

/// Which outcome counts as "listed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    /// Present on a list is the problem.
    Blacklist,
    /// Missing from a list is the problem.
    Whitelist,
}

impl ListingMode {
    /// Whether `outcome` puts the server in the listed set.
    ///
    /// Timeouts and query errors are never listed in either mode.
    pub fn is_listed(&self, outcome: &Outcome) -> bool {
        match (self, outcome) {
            (ListingMode::Blacklist, Outcome::Present(_)) => true,
            (ListingMode::Whitelist, Outcome::Absent) => true,
            _ => false,
        }
    }

    /// Word used for listed servers in the status line.
    pub fn label(&self) -> &'static str {
        match self {
            ListingMode::Blacklist => "BLACKLISTED",
            ListingMode::Whitelist => "NOT WHITELISTED",
        }
    }
}

impl fmt::Display for ListingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingMode::Blacklist => f.write_str("blacklist"),
            ListingMode::Whitelist => f.write_str("whitelist"),
        }
    }
}

/// Accumulates outcomes while the list-server phase drains.
#[derive(Debug)]
pub struct Aggregator {
    mode: ListingMode,
    total: usize,
    listed: Vec<String>,
    timed_out: Vec<String>,
    recorded: usize,
    stats: OutcomeStats,
}

impl Aggregator {
    pub fn new(mode: ListingMode, total: usize) -> Self {
        Self {
            mode,
            total,
            listed: Vec::new(),
            timed_out: Vec::new(),
            recorded: 0,
            stats: OutcomeStats::new(),
        }
    }

    /// Records the outcome for `server`. Call once per completed query.
    pub fn record(&mut self, server: &str, outcome: &Outcome) {
        self.recorded += 1;
        self.stats.record(outcome.kind());

        match outcome {
            Outcome::TimedOut => {
                info!("{server} timed out");
                self.timed_out.push(server.to_string());
            }
            Outcome::QueryError(status) => {
                warn!("Query against {server} failed ({status}), skipping");
            }
            listed if self.mode.is_listed(listed) => {
                info!("{} on {server}", self.mode.label());
                self.listed.push(server.to_string());
            }
            other => debug!("{server}: {}", other.kind()),
        }
    }

    /// Closes the phase once the engine has reached quiescence.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Invariant` if the engine reports a submission
    /// without a completion, or if the number of recorded outcomes differs
    /// from the number of servers.
    pub fn finalize(self, phase: PhaseStats) -> Result<ResultSet, CheckError> {
        if !phase.is_balanced() {
            return Err(CheckError::Invariant(format!(
                "{} list queries submitted but {} completed",
                phase.submitted, phase.completed
            )));
        }
        if self.recorded != self.total {
            return Err(CheckError::Invariant(format!(
                "{} outcomes recorded for {} list servers",
                self.recorded, self.total
            )));
        }

        Ok(ResultSet {
            mode: self.mode,
            listed: self.listed,
            timed_out: self.timed_out,
            total: self.total,
            stats: self.stats,
        })
    }
}

/// Final listed and timed-out servers, in completion order.
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub mode: ListingMode,
    pub listed: Vec<String>,
    pub timed_out: Vec<String>,
    pub total: usize,
    pub stats: OutcomeStats,
}

impl ResultSet {
    pub fn listed_count(&self) -> usize {
        self.listed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::QueryStatus;
    use crate::error_handling::OutcomeKind;
    use std::net::Ipv4Addr;

    fn outcomes() -> Vec<(&'static str, Outcome)> {
        vec![
            ("a.example", Outcome::Present(Ipv4Addr::new(127, 0, 0, 2))),
            ("b.example", Outcome::Absent),
            ("c.example", Outcome::TimedOut),
            ("d.example", Outcome::QueryError(QueryStatus::Error("x".into()))),
            ("e.example", Outcome::Absent),
        ]
    }

    fn aggregate(mode: ListingMode) -> ResultSet {
        let outcomes = outcomes();
        let mut aggregator = Aggregator::new(mode, outcomes.len());
        for (server, outcome) in &outcomes {
            aggregator.record(server, outcome);
        }
        let phase = PhaseStats {
            submitted: outcomes.len(),
            completed: outcomes.len(),
        };
        aggregator.finalize(phase).unwrap()
    }

    #[test]
    fn test_blacklist_mode() {
        let result = aggregate(ListingMode::Blacklist);
        assert_eq!(result.listed, vec!["a.example"]);
        assert_eq!(result.timed_out, vec!["c.example"]);
        assert_eq!(result.stats.get(OutcomeKind::QueryError), 1);
    }

    #[test]
    fn test_whitelist_mode() {
        let result = aggregate(ListingMode::Whitelist);
        assert_eq!(result.listed, vec!["b.example", "e.example"]);
        assert_eq!(result.timed_out, vec!["c.example"]);
    }

    #[test]
    fn test_modes_are_inverse_on_present_absent() {
        let black = aggregate(ListingMode::Blacklist);
        let white = aggregate(ListingMode::Whitelist);
        let decided = black.stats.get(OutcomeKind::Present) + black.stats.get(OutcomeKind::Absent);
        assert_eq!(black.listed_count() + white.listed_count(), decided);
    }

    #[test]
    fn test_finalize_rejects_unbalanced_phase() {
        let mut aggregator = Aggregator::new(ListingMode::Blacklist, 2);
        aggregator.record("a.example", &Outcome::Absent);
        let phase = PhaseStats {
            submitted: 2,
            completed: 1,
        };
        assert!(matches!(
            aggregator.finalize(phase),
            Err(CheckError::Invariant(_))
        ));
    }

    #[test]
    fn test_finalize_rejects_missing_outcomes() {
        let mut aggregator = Aggregator::new(ListingMode::Blacklist, 2);
        aggregator.record("a.example", &Outcome::Absent);
        let phase = PhaseStats {
            submitted: 1,
            completed: 1,
        };
        assert!(matches!(
            aggregator.finalize(phase),
            Err(CheckError::Invariant(_))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ListingMode::Blacklist.label(), "BLACKLISTED");
        assert_eq!(ListingMode::Whitelist.label(), "NOT WHITELISTED");
        assert_eq!(ListingMode::Whitelist.to_string(), "whitelist");
    }
}
