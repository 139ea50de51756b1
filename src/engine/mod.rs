//! Asynchronous query engine.
//!
//! Queries are submitted without blocking and multiplexed on the current
//! task through a `FuturesUnordered`; nothing is spawned. Driving the engine
//! with `run_to_quiescence` polls every pending query to its terminal status
//! and hands each completion to a handler exactly once, in completion order.
//!
//! A run uses one engine per phase: the target lookup first, then the batch
//! of list-server lookups whose names depend on the first phase's answer.

mod policy;

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use log::trace;
use tokio::sync::Semaphore;

use crate::dns::{DnsLookup, RawReply};
use crate::initialization::init_semaphore;

pub use policy::{get_retry_strategy, QueryPolicy};

/// A finished query, as seen by a completion handler.
#[derive(Debug, Clone)]
pub struct Completion<T> {
    /// Caller-supplied tag identifying what the query was for
    pub tag: T,
    /// The name that was looked up
    pub name: String,
    /// Terminal reply
    pub reply: RawReply,
}

/// Counters for one drained phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseStats {
    /// Queries submitted since the previous quiescence
    pub submitted: usize,
    /// Completion handler invocations during this drain
    pub completed: usize,
}

impl PhaseStats {
    /// True when every submitted query produced exactly one completion.
    pub fn is_balanced(&self) -> bool {
        self.submitted == self.completed
    }
}

/// Submits A lookups and drives them to completion.
pub struct QueryEngine<T> {
    service: Arc<dyn DnsLookup>,
    policy: QueryPolicy,
    permits: Arc<Semaphore>,
    pending: FuturesUnordered<BoxFuture<'static, Completion<T>>>,
    submitted: usize,
}

impl<T: Send + 'static> QueryEngine<T> {
    pub fn new(service: Arc<dyn DnsLookup>, policy: QueryPolicy) -> Self {
        let permits = init_semaphore(policy.workers.max(1));
        Self {
            service,
            policy,
            permits,
            pending: FuturesUnordered::new(),
            submitted: 0,
        }
    }

    /// Queues an A lookup of `name`. Never blocks.
    ///
    /// Safe to call from inside a completion handler; the new query joins the
    /// drain that is already running.
    pub fn submit(&mut self, name: impl Into<String>, tag: T) {
        let name = name.into();
        let service = Arc::clone(&self.service);
        let permits = Arc::clone(&self.permits);
        let policy = self.policy.clone();

        trace!("Submitting A query for {name}");
        self.submitted += 1;
        self.pending.push(
            async move {
                let reply = match permits.acquire_owned().await {
                    Ok(permit) => {
                        let reply =
                            policy::lookup_with_policy(service.as_ref(), &name, &policy).await;
                        drop(permit);
                        reply
                    }
                    Err(_) => RawReply::error("query worker pool closed"),
                };
                Completion { tag, name, reply }
            }
            .boxed(),
        );
    }

    /// Number of queries submitted but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Blocks until every submitted query has completed.
    ///
    /// `on_complete` runs once per query with mutable access to the engine so
    /// it may submit follow-up queries. Returns the phase counters and resets
    /// them for the next phase.
    pub async fn run_to_quiescence<F>(&mut self, mut on_complete: F) -> PhaseStats
    where
        F: FnMut(&mut Self, Completion<T>),
    {
        let mut completed = 0;
        loop {
            let Some(completion) = self.pending.next().await else {
                break;
            };
            completed += 1;
            trace!(
                "Query for {} finished: {}",
                completion.name,
                completion.reply.status
            );
            on_complete(self, completion);
        }

        PhaseStats {
            submitted: std::mem::take(&mut self.submitted),
            completed,
        }
    }
}
