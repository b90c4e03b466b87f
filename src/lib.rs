//! newsharvest: unattended scrape-to-spreadsheet pipeline for a news portal
//!
//! Drives one browser session through search submission, tab switching and
//! news navigation, extracts the result articles with partial-failure
//! tolerance, normalizes their relative ages, drops stale ones, and compiles
//! a tabular report.

pub mod extract;
pub mod filter;
pub mod media;
pub mod money;
pub mod report;
pub mod session;
pub mod utils;

pub use extract::{collect_articles, Article, ExtractionError, RawArticleFields, SENTINEL};
pub use filter::{filter_by_months, relative_time_to_absolute};
pub use media::MediaFetcher;
pub use money::contains_money;
pub use report::{build_rows, write_workbook, ReportError, ReportRow, REPORT_HEADER};
pub use session::{
    BrowserSession, RetryPolicy, SessionController, SessionError, SessionState, WaitPoller,
    WaitTimeout,
};
