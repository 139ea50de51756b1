//! The blacklist check itself.
//!
//! A check runs in two strictly sequential phases on separate engines:
//!
//! 1. resolve the target host (one A query, fallback to the literal string);
//! 2. query every list server for the reversed-octet name of that address,
//!    all at once, and fold the outcomes into a `ResultSet`.
//!
//! The result set is read only after the second phase reaches quiescence.

mod aggregate;
mod classify;
mod resolve;

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::app::log_outcome_statistics;
use crate::config::Config;
use crate::dns::{build_query_name, DnsLookup};
use crate::engine::{QueryEngine, QueryPolicy};
use crate::error_handling::{CheckError, OutcomeStats};
use crate::threshold::{Status, Thresholds};

pub use aggregate::{Aggregator, ListingMode, ResultSet};
pub use classify::{classify, Outcome};
pub use resolve::{resolve_target, Target};

/// Everything a run needs, resolved and validated up front.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub host: String,
    pub servers: Vec<String>,
    pub mode: ListingMode,
    pub thresholds: Thresholds,
    pub policy: QueryPolicy,
}

impl CheckContext {
    /// Validates `config` and resolves the server list.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Config` for any invalid option; no network
    /// activity happens before this succeeds.
    pub fn from_config(config: &Config) -> Result<Self, CheckError> {
        config.validate()?;
        let thresholds = Thresholds::new(config.warning, config.critical)?;
        let servers = config.list_servers()?;

        Ok(Self {
            host: config.host.clone(),
            servers,
            mode: config.listing_mode(),
            thresholds,
            policy: QueryPolicy::from_config(config),
        })
    }
}

/// Finalized result bundle handed to the reporter.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Host as given on the command line
    pub host: String,
    /// Address the lists were queried for
    pub address: String,
    /// Whether `address` came from DNS rather than the literal host
    pub resolved: bool,
    pub mode: ListingMode,
    /// Listed servers in completion order
    pub listed_servers: Vec<String>,
    /// Timed-out servers in completion order
    pub timed_out_servers: Vec<String>,
    pub total_servers: usize,
    pub listed_count: usize,
    pub elapsed_seconds: f64,
    #[serde(skip)]
    pub stats: OutcomeStats,
}

/// A report together with its evaluated status.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub warning: usize,
    pub critical: usize,
    #[serde(flatten)]
    pub report: CheckReport,
}

/// Runs both phases of a check against `service`.
///
/// # Errors
///
/// Returns `CheckError::QueryName` if the target resolves to something no
/// list can be queried for (IPv6), before any list query is submitted, and
/// `CheckError::Invariant` if a phase loses a completion.
pub async fn run_check(
    context: &CheckContext,
    service: Arc<dyn DnsLookup>,
) -> Result<CheckReport, CheckError> {
    let start = Instant::now();

    // The target lookup gets exactly one attempt; --retry covers list queries only
    let resolve_policy = QueryPolicy {
        retries: 0,
        ..context.policy.clone()
    };
    let mut resolver = QueryEngine::new(Arc::clone(&service), resolve_policy);
    let target = resolve_target(&mut resolver, &context.host).await?;

    // Build every name first: an unusable address must fail before any list query
    let mut queries = Vec::with_capacity(context.servers.len());
    for server in &context.servers {
        queries.push((build_query_name(&target.address, server)?, server.clone()));
    }

    let mut engine = QueryEngine::new(service, context.policy.clone());
    for (name, server) in queries {
        debug!("Querying {name}");
        engine.submit(name, server);
    }
    info!(
        "Checking {} against {} {} servers",
        target.address,
        context.servers.len(),
        context.mode
    );

    let mut aggregator = Aggregator::new(context.mode, context.servers.len());
    let phase = engine
        .run_to_quiescence(|_, completion| {
            aggregator.record(&completion.tag, &classify(&completion.reply));
        })
        .await;
    let result = aggregator.finalize(phase)?;
    log_outcome_statistics(&result.stats);

    Ok(CheckReport {
        host: target.host,
        address: target.address,
        resolved: target.resolved,
        mode: result.mode,
        listed_count: result.listed_count(),
        listed_servers: result.listed,
        timed_out_servers: result.timed_out,
        total_servers: result.total,
        elapsed_seconds: start.elapsed().as_secs_f64(),
        stats: result.stats,
    })
}

/// Validates `config`, runs the check and evaluates the thresholds.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use rbl_check::initialization::init_resolver;
/// use rbl_check::{check_host, Config, HickoryLookup};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     host: "mail.example.org".to_string(),
///     ..Default::default()
/// };
/// let service = Arc::new(HickoryLookup::new(init_resolver(Duration::from_secs(5))));
/// let verdict = check_host(&config, service).await?;
/// println!("{}: {} of {}", verdict.status, verdict.report.listed_count, verdict.report.total_servers);
/// # Ok(())
/// # }
/// ```
pub async fn check_host(
    config: &Config,
    service: Arc<dyn DnsLookup>,
) -> Result<Verdict, CheckError> {
    let context = CheckContext::from_config(config)?;
    let report = run_check(&context, service).await?;
    let status = context.thresholds.evaluate(report.listed_count);

    Ok(Verdict {
        status,
        warning: context.thresholds.warning(),
        critical: context.thresholds.critical(),
        report,
    })
}
