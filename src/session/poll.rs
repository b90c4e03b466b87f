//! Bounded fixed-interval polling
//!
//! The portal renders pieces of the UI asynchronously, so every transition
//! in the session is guarded by a sleep-and-recheck loop. `WaitPoller` is
//! the single parameterized form of that loop: constant interval, hard
//! ceiling, a typed timeout naming what was waited for.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

use crate::utils::constants::POLL_INTERVAL;

/// A wait gave up before its condition came true.
#[derive(Debug, Error)]
#[error("`{target}` still not satisfied after {}s", .waited.as_secs())]
pub struct WaitTimeout {
    /// What the wait was watching (selector, tab count, ...)
    pub target: String,
    /// Total time spent before giving up
    pub waited: Duration,
}

/// Polls a condition at a fixed interval until it holds or the timeout is
/// exhausted. The interval never grows; a wait blocks the calling flow for
/// at most `timeout`.
#[derive(Debug, Clone, Copy)]
pub struct WaitPoller {
    timeout: Duration,
    interval: Duration,
}

impl WaitPoller {
    /// Poller with the standard 5s interval.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_interval(timeout, POLL_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Run `check` every interval until it returns true, or fail with a
    /// [`WaitTimeout`] naming `target` once the attempt budget
    /// (`timeout / interval`) is spent.
    pub async fn wait_until<F, Fut>(&self, target: &str, mut check: F) -> Result<(), WaitTimeout>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        let interval_ms = self.interval.as_millis().max(1);
        let max_attempts = (self.timeout.as_millis() / interval_ms).max(1);

        for attempt in 1..=max_attempts {
            if check().await {
                debug!(target, attempt = attempt as u64, "wait condition satisfied");
                return Ok(());
            }
            trace!(
                target,
                attempt = attempt as u64,
                max_attempts = max_attempts as u64,
                "condition not met yet"
            );
            tokio::time::sleep(self.interval).await;
        }

        Err(WaitTimeout {
            target: target.to_string(),
            waited: self.timeout,
        })
    }
}
