// src/retry.rs
//
// Bounded-retry policy passed into the operations that tolerate transient
// staleness, instead of loop counters inlined at every call site.

use std::time::Duration;

use crate::config::consts::STALE_RETRIES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self { max_attempts, backoff }
    }

    pub async fn pause(&self) {
        if !self.backoff.is_zero() {
            tokio::time::sleep(self.backoff).await;
        }
    }
}

impl Default for RetryPolicy {
    // The source retried stale references immediately; backoff stays zero
    // unless a caller asks for one.
    fn default() -> Self {
        Self { max_attempts: STALE_RETRIES, backoff: Duration::ZERO }
    }
}
