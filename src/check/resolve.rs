//! Target resolution (phase one).

use std::net::Ipv4Addr;

use log::{debug, warn};

use super::classify::{classify, Outcome};
use crate::engine::QueryEngine;
use crate::error_handling::CheckError;

/// The host under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host exactly as given
    pub host: String,
    /// Resolved IPv4 address, or `host` itself when resolution failed
    pub address: String,
    /// Whether `address` came from DNS
    pub resolved: bool,
}

/// Resolves `host` with a single A query and waits for it.
///
/// Any non-success reply falls back to treating `host` as a literal address;
/// the run continues either way.
///
/// # Errors
///
/// Returns `CheckError::Invariant` if the engine does not report exactly one
/// completion for the one query submitted.
pub async fn resolve_target(
    engine: &mut QueryEngine<()>,
    host: &str,
) -> Result<Target, CheckError> {
    engine.submit(host, ());

    let mut outcome = None;
    let phase = engine
        .run_to_quiescence(|_, completion| outcome = Some(classify(&completion.reply)))
        .await;

    let outcome = match (phase.submitted, phase.completed, outcome) {
        (1, 1, Some(outcome)) => outcome,
        (submitted, completed, _) => {
            return Err(CheckError::Invariant(format!(
                "target lookup: {submitted} submitted, {completed} completed"
            )))
        }
    };

    let target = match outcome {
        Outcome::Present(address) => {
            debug!("Resolved {host} to {address}");
            Target {
                host: host.to_string(),
                address: address.to_string(),
                resolved: true,
            }
        }
        other => {
            if host.parse::<Ipv4Addr>().is_ok() {
                debug!("{host} is an IPv4 literal ({})", other.kind());
            } else {
                warn!(
                    "Could not resolve {host} ({}), checking it as a literal address",
                    other.kind()
                );
            }
            Target {
                host: host.to_string(),
                address: host.to_string(),
                resolved: false,
            }
        }
    };
    Ok(target)
}
