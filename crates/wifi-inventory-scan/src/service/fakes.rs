//! Scriptable [`VendorLookup`] double for service tests.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::error::LookupError;
use crate::port::{LookupResponse, VendorLookup};

/// Scripted outcome of one call.
pub(crate) enum Reply {
    Status(u16, &'static str),
    Timeout,
}

/// Replies per identifier are consumed in order; once a script runs dry the
/// lookup answers 200 with `"Vendor <identifier>"`.
#[derive(Default)]
pub(crate) struct FakeLookup {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<(String, Instant)>>,
}

impl FakeLookup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script(self, identifier: &str, replies: Vec<Reply>) -> Self {
        self.scripts
            .lock()
            .insert(identifier.to_owned(), replies.into());
        self
    }

    pub(crate) fn delay(self, identifier: &str, delay: Duration) -> Self {
        self.delays.lock().insert(identifier.to_owned(), delay);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub(crate) fn call_times(&self, identifier: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .iter()
            .filter(|(id, _)| id == identifier)
            .map(|(_, at)| *at)
            .collect()
    }
}

#[async_trait]
impl VendorLookup for FakeLookup {
    async fn lookup(&self, identifier: &str) -> Result<LookupResponse, LookupError> {
        self.calls
            .lock()
            .push((identifier.to_owned(), Instant::now()));

        let delay = self.delays.lock().get(identifier).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .scripts
            .lock()
            .get_mut(identifier)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Status(status, body)) => Ok(LookupResponse::new(status, body)),
            Some(Reply::Timeout) => Err(LookupError::Timeout { after_ms: 0 }),
            None => Ok(LookupResponse::new(200, format!("Vendor {identifier}"))),
        }
    }
}
