//! Bounded retry-with-delay around fallible actions
//!
//! Network and UI boundaries in the session (opening the browser, clicking
//! navigation links) are wrapped in the same retry shape: attempt, log,
//! sleep a fixed delay, try again, and surface a typed exhaustion error
//! carrying the last failure once the budget runs out.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{error, info};

use super::errors::SessionError;

/// Fixed-attempt, fixed-delay retry policy.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Run `action` up to the attempt budget. Every attempt number and error
    /// is logged; exhaustion yields
    /// [`SessionError::RetriesExhausted`] wrapping the last failure.
    pub async fn execute<T, F, Fut>(&self, action: &str, mut run: F) -> Result<T, SessionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let started = Instant::now();
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            info!(action, attempt, max_attempts = self.max_attempts, "attempting action");
            match run().await {
                Ok(value) => {
                    info!(
                        action,
                        attempt,
                        "action succeeded after {:.2}s",
                        started.elapsed().as_secs_f64()
                    );
                    return Ok(value);
                }
                Err(e) => {
                    error!(action, attempt, "attempt failed: {e:#}");
                    last_error = Some(e);
                    if attempt < self.max_attempts {
                        info!(action, delay_secs = self.delay.as_secs(), "retrying after delay");
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }

        error!(action, attempts = self.max_attempts, "all attempts failed");
        Err(SessionError::RetriesExhausted {
            action: action.to_string(),
            attempts: self.max_attempts,
            source: last_error
                .unwrap_or_else(|| anyhow::anyhow!("retry policy was given a zero attempt budget")),
        })
    }
}
