//! The session state machine driving one harvest run
//!
//! Owns the single browser session for the lifetime of a run and walks it
//! through search submission, tab switching, news navigation, article
//! collection, date filtering, and report persistence. Each guarded
//! transition maps to one [`SessionState`]; an unrecovered failure moves the
//! machine to `Failed` and skips straight to cleanup.

use std::path::{Path, PathBuf};

use chrono::Local;
use chromiumoxide::page::Page;
use tracing::{debug, info};

use crate::extract::selectors::{
    NEWS_LINK_XPATH, RESULTS_CONTAINER_SELECTOR, SEARCH_BOX_SELECTOR,
};
use crate::extract::{collect_articles, Article};
use crate::filter::filter_by_months;
use crate::media::MediaFetcher;
use crate::report::{build_rows, write_workbook};
use crate::utils::constants::{
    NEWS_LINK_ATTEMPTS, NEWS_LINK_RETRY_DELAY, NEWS_LINK_TIMEOUT, NEW_TAB_TIMEOUT,
    OPEN_BROWSER_ATTEMPTS, OPEN_BROWSER_RETRY_DELAY, RESULTS_TIMEOUT, SEARCH_BOX_TIMEOUT,
};

use super::browser::BrowserSession;
use super::errors::{driver, SessionError};
use super::poll::WaitPoller;
use super::retry::RetryPolicy;

use anyhow::Context;

/// Where the run currently stands. `Failed` is terminal and triggers
/// cleanup; nothing resumes a failed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    BrowserOpen,
    SearchSubmitted,
    ResultsTabActive,
    NewsTabActive,
    ArticlesCollected,
    Completed,
    Failed,
}

/// Drives one scrape-to-spreadsheet run.
pub struct SessionController {
    fetcher: MediaFetcher,
    output_dir: PathBuf,
    state: SessionState,
}

impl SessionController {
    /// Set up a controller writing pictures and the report under
    /// `output_dir`. The pictures directory is created up front.
    pub fn new(output_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let output_dir = output_dir.into();
        let fetcher = MediaFetcher::new(output_dir.join("pictures"))?;
        Ok(Self {
            fetcher,
            output_dir,
            state: SessionState::Init,
        })
    }

    /// Current position in the state machine.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the whole pipeline: open the portal, search `keyword`, collect
    /// the news results, keep articles newer than `months` months, and
    /// persist the report. Returns the path of the written workbook.
    ///
    /// The browser session is closed on every exit path; teardown errors are
    /// logged by the session itself and never replace the run's outcome.
    pub async fn run(
        &mut self,
        url: &str,
        keyword: &str,
        months: u32,
    ) -> Result<PathBuf, SessionError> {
        self.transition(SessionState::Init);

        let open_retry = RetryPolicy::new(OPEN_BROWSER_ATTEMPTS, OPEN_BROWSER_RETRY_DELAY);
        let session = match open_retry.execute("open_browser", BrowserSession::launch).await {
            Ok(session) => session,
            Err(e) => {
                self.transition(SessionState::Failed);
                return Err(e);
            }
        };
        self.transition(SessionState::BrowserOpen);

        let outcome = self.drive(&session, url, keyword, months).await;
        match outcome {
            Ok(_) => self.transition(SessionState::Completed),
            Err(_) => self.transition(SessionState::Failed),
        }

        session.close().await;
        outcome
    }

    /// Steps 2..8 of the run, executed with a live browser. Split out so
    /// `run` can guarantee cleanup around any early return.
    async fn drive(
        &mut self,
        session: &BrowserSession,
        url: &str,
        keyword: &str,
        months: u32,
    ) -> Result<PathBuf, SessionError> {
        info!(url, "opening portal");
        let page = session
            .browser()
            .new_page(url)
            .await
            .map_err(driver("failed to open portal page"))?;
        page.wait_for_navigation()
            .await
            .map_err(driver("failed to load portal page"))?;

        self.submit_search(&page, keyword).await?;
        self.transition(SessionState::SearchSubmitted);

        let results_page = self.await_results_tab(session).await?;
        self.transition(SessionState::ResultsTabActive);

        self.open_news_tab(&results_page).await?;
        self.transition(SessionState::NewsTabActive);

        self.await_results_container(&results_page).await?;

        let articles = collect_articles(&results_page, &self.fetcher).await;
        self.transition(SessionState::ArticlesCollected);
        log_articles(&articles);

        let now = Local::now();
        let articles = filter_by_months(articles, months, now);
        info!(count = articles.len(), "articles after date filter");

        let rows = build_rows(&articles, now);
        let path = write_workbook(&rows, &self.output_dir, now)?;
        Ok(path)
    }

    /// Wait for the search input, type the keyword, submit. Not internally
    /// retried; a timeout here fails the run.
    async fn submit_search(&self, page: &Page, keyword: &str) -> Result<(), SessionError> {
        info!("waiting for the search box to be visible");
        let page_ref = page;
        WaitPoller::new(SEARCH_BOX_TIMEOUT)
            .wait_until(SEARCH_BOX_SELECTOR, move || async move {
                page_ref.find_element(SEARCH_BOX_SELECTOR).await.is_ok()
            })
            .await
            .map_err(|t| SessionError::VisibilityTimeout {
                target: t.target,
                waited_secs: t.waited.as_secs(),
            })?;

        let search_box = page
            .find_element(SEARCH_BOX_SELECTOR)
            .await
            .map_err(driver("failed to locate search box"))?;
        search_box
            .focus()
            .await
            .map_err(driver("failed to focus search box"))?;
        search_box
            .type_str(keyword)
            .await
            .map_err(driver("failed to input search keyword"))?;
        search_box
            .press_key("Enter")
            .await
            .map_err(driver("failed to submit search"))?;

        info!(keyword, "search submitted");
        Ok(())
    }

    /// Poll for a second tab to open with the results, then make it the
    /// active page.
    async fn await_results_tab(
        &self,
        session: &BrowserSession,
    ) -> Result<Page, SessionError> {
        let browser = session.browser();
        WaitPoller::new(NEW_TAB_TIMEOUT)
            .wait_until("second browser tab", move || async move {
                browser.pages().await.map(|p| p.len() > 1).unwrap_or(false)
            })
            .await
            .map_err(|t| SessionError::NewTabTimeout {
                waited_secs: t.waited.as_secs(),
            })?;

        let pages = browser
            .pages()
            .await
            .map_err(driver("failed to enumerate tabs"))?;
        let results_page = pages
            .into_iter()
            .next_back()
            .ok_or_else(|| SessionError::Driver(anyhow::anyhow!("no open tabs after wait")))?;
        results_page
            .bring_to_front()
            .await
            .map_err(driver("failed to switch to the new tab"))?;

        info!("switched to the new tab");
        Ok(results_page)
    }

    /// Find and click the News navigation link, retrying the whole
    /// wait-and-click on failure.
    async fn open_news_tab(&self, page: &Page) -> Result<(), SessionError> {
        let retry = RetryPolicy::new(NEWS_LINK_ATTEMPTS, NEWS_LINK_RETRY_DELAY);
        let page_ref = page;
        retry
            .execute("click_news_link", move || async move {
                WaitPoller::new(NEWS_LINK_TIMEOUT)
                    .wait_until(NEWS_LINK_XPATH, move || async move {
                        page_ref.find_xpath(NEWS_LINK_XPATH).await.is_ok()
                    })
                    .await
                    .map_err(|t| anyhow::anyhow!("{t}"))?;

                let link = page_ref
                    .find_xpath(NEWS_LINK_XPATH)
                    .await
                    .context("failed to locate the News link")?;
                link.click().await.context("failed to click the News link")?;
                Ok(())
            })
            .await?;

        info!("News link clicked");
        Ok(())
    }

    /// Wait for the news results list to render.
    async fn await_results_container(&self, page: &Page) -> Result<(), SessionError> {
        let page_ref = page;
        WaitPoller::new(RESULTS_TIMEOUT)
            .wait_until(RESULTS_CONTAINER_SELECTOR, move || async move {
                page_ref
                    .find_element(RESULTS_CONTAINER_SELECTOR)
                    .await
                    .is_ok()
            })
            .await
            .map_err(|t| SessionError::ResultsNotLoaded {
                target: t.target,
                waited_secs: t.waited.as_secs(),
            })
    }

    /// Directory receiving the report and the pictures subdirectory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "session state transition");
        self.state = next;
    }
}

/// Log the collected working set, one line per article.
fn log_articles(articles: &[Article]) {
    for (index, article) in articles.iter().enumerate() {
        info!(
            "article {}: title={} link={} source={} time={}",
            index + 1,
            article.title,
            article.link,
            article.source,
            article.relative_time
        );
    }
}
