//! Browser session orchestration
//!
//! Everything stateful about a run lives here: the browser lifecycle, the
//! wait/retry combinators guarding each UI transition, the typed failure
//! taxonomy, and the controller that sequences the whole pipeline.

mod browser;
mod controller;
mod errors;
mod poll;
mod retry;

pub use browser::BrowserSession;
pub use controller::{SessionController, SessionState};
pub use errors::SessionError;
pub use poll::{WaitPoller, WaitTimeout};
pub use retry::RetryPolicy;
