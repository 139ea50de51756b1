//! Reply classification.

use std::net::Ipv4Addr;

use crate::dns::{QueryStatus, RawReply};
use crate::error_handling::OutcomeKind;

/// Classified result of one list-server query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list published an address for the query name.
    Present(Ipv4Addr),
    /// No data or NXDOMAIN: the address is not on the list.
    Absent,
    /// The query timed out.
    TimedOut,
    /// Any other terminal failure; diagnostic only.
    QueryError(QueryStatus),
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Present(_) => OutcomeKind::Present,
            Outcome::Absent => OutcomeKind::Absent,
            Outcome::TimedOut => OutcomeKind::TimedOut,
            Outcome::QueryError(_) => OutcomeKind::QueryError,
        }
    }
}

/// Maps a terminal reply to an outcome.
///
/// A successful reply without an address is treated as no data.
pub fn classify(reply: &RawReply) -> Outcome {
    match (&reply.status, reply.address) {
        (QueryStatus::Ok, Some(address)) => Outcome::Present(address),
        (QueryStatus::Ok, None) | (QueryStatus::NoData, _) | (QueryStatus::NxDomain, _) => {
            Outcome::Absent
        }
        (QueryStatus::Timeout, _) => Outcome::TimedOut,
        (status @ QueryStatus::Error(_), _) => Outcome::QueryError(status.clone()),
    }
}
