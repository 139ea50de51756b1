//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

/// Resolver options for list lookups.
///
/// A single attempt per lookup: retries are layered above the resolver so
/// they can be counted and logged per list server.
pub fn resolver_opts(query_timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = query_timeout;
    opts.attempts = 1;
    // Query names are always absolute; never append search domains
    opts.ndots = 0;
    opts
}

/// Initializes the DNS resolver for target and list-server lookups.
///
/// Uses the system resolver configuration so list queries go through the
/// operator's own recursive resolver. Several large lists refuse queries
/// that arrive via public resolvers. Falls back to the built-in default
/// configuration (Google DNS) when the system configuration is unreadable.
pub fn init_resolver(query_timeout: Duration) -> TokioAsyncResolver {
    let opts = resolver_opts(query_timeout);

    match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _)) => {
            debug!(
                "Using system DNS configuration ({} name servers)",
                config.name_servers().len()
            );
            TokioAsyncResolver::tokio(config, opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
        }
    }
}
