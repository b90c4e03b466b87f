//! Shared configuration constants
//!
//! Timeout, interval, and attempt budgets used throughout the pipeline.
//! The values mirror the portal's observed rendering behavior; changing
//! them changes how long a stuck run blocks before failing.

use std::time::Duration;

/// Chrome user agent string presented by the browser and the image fetcher
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Fixed interval between UI poll checks; never grows
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long the portal gets to render the search input
pub const SEARCH_BOX_TIMEOUT: Duration = Duration::from_secs(180);

/// Ceiling for the results tab to appear (6 polls of 5s)
pub const NEW_TAB_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-attempt visibility wait for the News navigation link
pub const NEWS_LINK_TIMEOUT: Duration = Duration::from_secs(30);

/// How long the news results container gets to render
pub const RESULTS_TIMEOUT: Duration = Duration::from_secs(60);

/// Attempt budget for launching the browser
pub const OPEN_BROWSER_ATTEMPTS: u32 = 3;

/// Delay between browser launch attempts
pub const OPEN_BROWSER_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Attempt budget for clicking the News navigation link
pub const NEWS_LINK_ATTEMPTS: u32 = 3;

/// Delay between News-link click attempts
pub const NEWS_LINK_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Whole-pipeline attempt budget applied by the task entry point
pub const TASK_ATTEMPTS: u32 = 5;
