//! Per-query timeout and retry policy.

use std::time::Duration;

use log::debug;
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::RetryIf;

use crate::config::{
    Config, DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RETRIES, DEFAULT_WORKERS, RETRY_BACKOFF_BASE_MS,
    RETRY_BACKOFF_FACTOR, RETRY_MAX_DELAY_MS,
};
use crate::dns::{DnsLookup, RawReply};

/// How each submitted query is executed.
#[derive(Debug, Clone)]
pub struct QueryPolicy {
    /// Outer timeout per attempt; `None` relies on the lookup service alone.
    pub timeout: Option<Duration>,
    /// Extra attempts after a timeout or error.
    pub retries: usize,
    /// Maximum queries in flight.
    pub workers: usize,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS)),
            retries: DEFAULT_RETRIES,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl QueryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: Some(Duration::from_secs(config.query_timeout)),
            retries: config.retry,
            workers: config.workers,
        }
    }
}

/// Creates an exponential backoff retry strategy.
///
/// Yields `retries` delays starting at ~200ms and capped at
/// `RETRY_MAX_DELAY_MS`; an empty strategy means a single attempt.
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BACKOFF_BASE_MS)
        .factor(RETRY_BACKOFF_FACTOR)
        .max_delay(Duration::from_millis(RETRY_MAX_DELAY_MS))
        .take(retries)
}

/// Runs one query under `policy`, always returning a terminal reply.
///
/// Timeouts and opaque errors are retried; answers, no-data and NXDOMAIN are
/// final on the first attempt. The last reply wins once retries run out.
pub(crate) async fn lookup_with_policy(
    service: &dyn DnsLookup,
    name: &str,
    policy: &QueryPolicy,
) -> RawReply {
    let timeout = policy.timeout;
    let result = RetryIf::spawn(
        get_retry_strategy(policy.retries),
        || async move {
            let reply = attempt(service, name, timeout).await;
            if reply.status.is_retriable() {
                Err(reply)
            } else {
                Ok(reply)
            }
        },
        |reply: &RawReply| {
            debug!("Retrying {name} after {}", reply.status);
            true
        },
    )
    .await;

    match result {
        Ok(reply) | Err(reply) => reply,
    }
}

async fn attempt(service: &dyn DnsLookup, name: &str, timeout: Option<Duration>) -> RawReply {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, service.lookup_a(name))
            .await
            .unwrap_or_else(|_| RawReply::timeout()),
        None => service.lookup_a(name).await,
    }
}
