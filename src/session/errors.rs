//! Typed failure taxonomy for one harvest session
//!
//! UI-wait exhaustion and retry exhaustion are modeled as explicit variants
//! rather than bare stack unwinding, so the controller's state machine is
//! inspectable by callers and tests.

use thiserror::Error;

use crate::report::ReportError;

/// Everything that can terminate a session run.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An element the flow depends on never became visible.
    #[error("element `{target}` not visible after {waited_secs}s")]
    VisibilityTimeout { target: String, waited_secs: u64 },

    /// The results tab never opened after submitting the search.
    #[error("the new tab did not load within {waited_secs}s")]
    NewTabTimeout { waited_secs: u64 },

    /// The news results container never rendered on the news tab.
    #[error("news results `{target}` did not load after {waited_secs}s")]
    ResultsNotLoaded { target: String, waited_secs: u64 },

    /// A retried action ran out of attempts; wraps the last failure.
    #[error("action `{action}` failed after {attempts} attempts")]
    RetriesExhausted {
        action: String,
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },

    /// A non-retried browser-driver operation failed.
    #[error("browser driver error: {0:#}")]
    Driver(#[source] anyhow::Error),

    /// The assembled report could not be persisted.
    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),
}

/// Map a driver error into [`SessionError::Driver`] with a fixed context
/// line: `.map_err(driver("failed to open portal page"))?`.
pub(crate) fn driver<E>(context: &'static str) -> impl FnOnce(E) -> SessionError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| SessionError::Driver(anyhow::Error::new(e).context(context))
}
