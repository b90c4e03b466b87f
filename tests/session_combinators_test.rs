//! Wait and retry combinator behavior
//!
//! Short timeouts and zero delays keep these deterministic and fast; the
//! production intervals live in `utils::constants`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use newsharvest::{RetryPolicy, SessionError, WaitPoller};

#[tokio::test]
async fn wait_poller_returns_once_condition_holds() {
    let calls = AtomicU32::new(0);
    let calls_ref = &calls;

    let poller = WaitPoller::with_interval(Duration::from_millis(500), Duration::from_millis(10));
    let outcome = poller
        .wait_until("results list", move || async move {
            calls_ref.fetch_add(1, Ordering::SeqCst) + 1 >= 3
        })
        .await;

    assert!(outcome.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn wait_poller_times_out_with_target_and_duration() {
    let poller = WaitPoller::with_interval(Duration::from_millis(50), Duration::from_millis(10));
    let timeout = poller
        .wait_until("#never-there", move || async move { false })
        .await
        .unwrap_err();

    assert_eq!(timeout.target, "#never-there");
    assert_eq!(timeout.waited, Duration::from_millis(50));
}

#[tokio::test]
async fn retry_policy_returns_first_success() {
    let calls = AtomicU32::new(0);
    let calls_ref = &calls;

    let policy = RetryPolicy::new(3, Duration::ZERO);
    let value = policy
        .execute("flaky_action", move || async move {
            let attempt = calls_ref.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 2 {
                anyhow::bail!("not yet");
            }
            Ok(attempt)
        })
        .await
        .unwrap();

    assert_eq!(value, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn retry_policy_exhaustion_wraps_the_last_error() {
    let policy = RetryPolicy::new(3, Duration::ZERO);
    let error = policy
        .execute("doomed_action", move || async move {
            Err::<(), _>(anyhow::anyhow!("still broken"))
        })
        .await
        .unwrap_err();

    match error {
        SessionError::RetriesExhausted {
            action,
            attempts,
            source,
        } => {
            assert_eq!(action, "doomed_action");
            assert_eq!(attempts, 3);
            assert_eq!(source.to_string(), "still broken");
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}
