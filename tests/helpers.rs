// Shared test helpers: a scripted DNS service.
//
// Integration tests drive the public API against `FakeLookup` so no test
// touches the network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rbl_check::{DnsLookup, RawReply};

/// A scripted reply: how long to wait, then what to answer.
#[derive(Clone)]
pub struct Scripted {
    pub delay_ms: u64,
    pub reply: RawReply,
}

/// DNS service answering from a fixed script.
///
/// Names without a script entry answer NXDOMAIN after 1ms.
#[derive(Default)]
pub struct FakeLookup {
    script: HashMap<String, Scripted>,
    calls: AtomicUsize,
    asked: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, name: &str, address: Ipv4Addr, delay_ms: u64) -> Self {
        self.script(name, RawReply::answer(address), delay_ms)
    }

    pub fn script(mut self, name: &str, reply: RawReply, delay_ms: u64) -> Self {
        self.script
            .insert(name.to_string(), Scripted { delay_ms, reply });
        self
    }

    /// Total lookups performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Names looked up, in the order the lookups started.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsLookup for FakeLookup {
    async fn lookup_a(&self, name: &str) -> RawReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.asked.lock().unwrap().push(name.to_string());

        let scripted = self.script.get(name).cloned().unwrap_or(Scripted {
            delay_ms: 1,
            reply: RawReply::nx_domain(),
        });
        tokio::time::sleep(Duration::from_millis(scripted.delay_ms)).await;
        scripted.reply
    }
}

/// The address list servers publish for a listed host.
#[allow(dead_code)]
pub fn listed() -> Ipv4Addr {
    Ipv4Addr::new(127, 0, 0, 2)
}
