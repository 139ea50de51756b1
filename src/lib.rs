//! rbl_check library: DNS blacklist and whitelist checks
//!
//! This library checks whether a host's IPv4 address is published on a set of
//! DNS-based lists. The target is resolved first, then every list server is
//! queried concurrently for the reversed-octet name of that address, and the
//! classified replies are folded into a listed count that is evaluated
//! against warning and critical boundaries.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rbl_check::initialization::init_resolver;
//! use rbl_check::{check_host, render_status_line, Config, HickoryLookup};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     host: "mail.example.org".to_string(),
//!     servers: vec!["zen.spamhaus.org".to_string()],
//!     ..Default::default()
//! };
//!
//! let service = Arc::new(HickoryLookup::new(init_resolver(Duration::from_secs(5))));
//! let verdict = check_host(&config, service).await?;
//! println!("{}", render_status_line(&verdict));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime with the time driver enabled. A
//! current-thread runtime is sufficient; no tasks are spawned.

mod app;
pub mod check;
pub mod config;
pub mod dns;
pub mod engine;
mod error_handling;
pub mod initialization;
mod threshold;

// Re-export public API
pub use app::{render_failure, render_json, render_status_line};
pub use check::{check_host, run_check, CheckContext, CheckReport, ListingMode, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DnsLookup, HickoryLookup, QueryStatus, RawReply};
pub use error_handling::{
    CheckError, ConfigError, InitializationError, OutcomeKind, OutcomeStats, QueryNameError,
};
pub use threshold::{Status, Thresholds};
