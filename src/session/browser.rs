//! Browser lifecycle for one harvest session
//!
//! Launches a headless Chromium with a fixed 1920x1080 viewport, keeps the
//! CDP event handler task and the temporary profile directory together with
//! the browser handle, and guarantees teardown on every exit path. Teardown
//! logs and swallows its own errors so a failed close never masks the
//! session's original failure.

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use tokio::task::{self, JoinHandle};
use tracing::{info, warn};

use crate::utils::constants::CHROME_USER_AGENT;

/// A running browser plus the resources tied to its lifetime.
///
/// The handler task MUST be aborted when the session ends, and the temp
/// profile directory can only be removed after the Chrome process has
/// released its file handles.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserSession {
    /// Launch a fresh headless browser with a unique profile directory.
    pub async fn launch() -> Result<Self> {
        let chrome_path = match find_browser_executable() {
            Ok(path) => path,
            Err(_) => download_managed_browser().await?,
        };

        let user_data_dir =
            std::env::temp_dir().join(format!("newsharvest_chrome_{}", std::process::id()));
        std::fs::create_dir_all(&user_data_dir)
            .context("failed to create user data directory")?;

        let config = BrowserConfigBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .window_size(1920, 1080)
            .user_data_dir(user_data_dir.clone())
            .chrome_executable(chrome_path)
            .headless_mode(HeadlessMode::default())
            .arg(format!("--user-agent={CHROME_USER_AGENT}"))
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-notifications")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--mute-audio")
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        info!("launching browser");
        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch browser")?;

        let handler_task = task::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("browser handler event error: {e:?}");
                }
            }
            info!("browser event handler task completed");
        });

        Ok(Self {
            browser,
            handler: handler_task,
            user_data_dir: Some(user_data_dir),
        })
    }

    #[must_use]
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser and clean up. Every step is best-effort: errors are
    /// logged, never propagated.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("failed to wait for browser exit: {e}");
        }
        self.cleanup_temp_dir();
    }

    /// Remove the temp profile directory. Blocking on purpose: it is also
    /// called from `Drop`, where async is unavailable.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!("failed to remove temp profile {}: {e}", path.display());
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.user_data_dir.is_some() {
            warn!("browser session dropped without explicit close, removing temp profile in Drop");
            self.cleanup_temp_dir();
        }
    }
}

/// Find a Chrome/Chromium executable: `CHROMIUM_PATH` overrides everything,
/// then well-known install locations, then `which` on unix systems.
fn find_browser_executable() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("using browser from CHROMIUM_PATH: {}", path.display());
            return Ok(path);
        }
        warn!("CHROMIUM_PATH points to a non-existent file: {}", path.display());
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    for candidate in candidates {
        let path = PathBuf::from(candidate);
        if path.exists() {
            info!("found browser at {}", path.display());
            return Ok(path);
        }
    }

    if !cfg!(target_os = "windows") {
        for cmd in &["chromium", "chromium-browser", "google-chrome", "chrome"] {
            if let Ok(output) = Command::new("which").arg(cmd).output()
                && output.status.success()
            {
                let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !found.is_empty() {
                    let path = PathBuf::from(found);
                    info!("found browser via `which {cmd}`: {}", path.display());
                    return Ok(path);
                }
            }
        }
    }

    warn!("no Chrome/Chromium executable found, falling back to managed download");
    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

/// Download a managed Chromium build into a cache directory and return the
/// executable path.
async fn download_managed_browser() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("newsharvest")
        .join("chromium");
    std::fs::create_dir_all(&cache_dir).context("failed to create browser cache directory")?;

    info!("downloading managed Chromium into {}", cache_dir.display());
    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .context("failed to build fetcher options")?,
    );
    let revision = fetcher.fetch().await.context("failed to fetch browser")?;

    info!("downloaded Chromium to {}", revision.folder_path.display());
    Ok(revision.executable_path)
}
