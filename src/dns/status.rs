//! Terminal query statuses and raw replies.

use std::fmt;
use std::net::Ipv4Addr;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

/// Terminal status of one DNS query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// The server answered with data.
    Ok,
    /// The name exists but has no A records.
    NoData,
    /// The name does not exist.
    NxDomain,
    /// No reply arrived in time.
    Timeout,
    /// Any other failure, reported opaquely.
    Error(String),
}

impl QueryStatus {
    /// Whether another attempt could produce a different answer.
    pub fn is_retriable(&self) -> bool {
        matches!(self, QueryStatus::Timeout | QueryStatus::Error(_))
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStatus::Ok => f.write_str("ok"),
            QueryStatus::NoData => f.write_str("no data"),
            QueryStatus::NxDomain => f.write_str("name does not exist"),
            QueryStatus::Timeout => f.write_str("timeout"),
            QueryStatus::Error(detail) => write!(f, "error: {detail}"),
        }
    }
}

impl From<&ResolveError> for QueryStatus {
    fn from(error: &ResolveError) -> Self {
        match error.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
                ResponseCode::NXDomain => QueryStatus::NxDomain,
                ResponseCode::NoError => QueryStatus::NoData,
                other => QueryStatus::Error(other.to_string()),
            },
            ResolveErrorKind::Timeout => QueryStatus::Timeout,
            ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
                QueryStatus::Timeout
            }
            _ => QueryStatus::Error(error.to_string()),
        }
    }
}

/// What a completed query hands to its completion handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    /// Terminal status
    pub status: QueryStatus,
    /// First returned address, when the status is `Ok`
    pub address: Option<Ipv4Addr>,
}

impl RawReply {
    pub fn answer(address: Ipv4Addr) -> Self {
        RawReply {
            status: QueryStatus::Ok,
            address: Some(address),
        }
    }

    pub fn no_data() -> Self {
        Self::from_status(QueryStatus::NoData)
    }

    pub fn nx_domain() -> Self {
        Self::from_status(QueryStatus::NxDomain)
    }

    pub fn timeout() -> Self {
        Self::from_status(QueryStatus::Timeout)
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::from_status(QueryStatus::Error(detail.into()))
    }

    /// A reply without an address.
    pub fn from_status(status: QueryStatus) -> Self {
        RawReply {
            status,
            address: None,
        }
    }
}
