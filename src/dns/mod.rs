//! DNS lookups and query names.
//!
//! This module provides:
//! - The `DnsLookup` trait and its `hickory-resolver` implementation
//! - Terminal query statuses and the raw replies handed to completion handlers
//! - Reversed-octet query name construction
//!
//! Only A-record lookups are performed.

mod lookup;
mod query_name;
mod status;

// Re-export public API
pub use lookup::{DnsLookup, HickoryLookup};
pub use query_name::build_query_name;
pub use status::{QueryStatus, RawReply};
