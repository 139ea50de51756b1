//! The DNS lookup seam.
//!
//! Everything above this module talks to `DnsLookup`; the production
//! implementation wraps a hickory `TokioAsyncResolver`.

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::status::{QueryStatus, RawReply};

/// An asynchronous A-record lookup service.
///
/// Implementations must always reach a terminal status: every call returns a
/// `RawReply`, never an error, and must not wait forever.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Looks up the A records of `name`.
    async fn lookup_a(&self, name: &str) -> RawReply;
}

/// `DnsLookup` over a hickory resolver.
pub struct HickoryLookup {
    resolver: TokioAsyncResolver,
}

impl HickoryLookup {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn lookup_a(&self, name: &str) -> RawReply {
        let fqdn = to_fqdn(name);
        match self.resolver.ipv4_lookup(fqdn.as_str()).await {
            Ok(lookup) => match lookup.iter().next() {
                Some(record) => RawReply::answer(record.0),
                None => RawReply::no_data(),
            },
            Err(e) => {
                log::trace!("Lookup of {fqdn} failed: {e}");
                RawReply::from_status(QueryStatus::from(&e))
            }
        }
    }
}

/// Appends the root label so the resolver never applies search domains.
pub(crate) fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
