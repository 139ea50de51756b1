//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - DNS resolver
//! - Worker semaphore bounding in-flight queries

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_resolver, resolver_opts};

/// Initializes a semaphore for controlling concurrency.
///
/// Each in-flight DNS query holds one permit, so `count` is the maximum
/// number of queries outstanding at once.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
