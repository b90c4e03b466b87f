//! Thumbnail download for extracted articles
//!
//! Streams article thumbnails into a pictures directory and hands back the
//! local filename. Every failure mode (non-HTTP URL, bad status, transport
//! error) resolves to `None` so the owning article proceeds without an
//! image instead of failing extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use url::Url;

use crate::utils::constants::CHROME_USER_AGENT;

/// Downloads thumbnails into a pictures directory.
pub struct MediaFetcher {
    client: Client,
    pictures_dir: PathBuf,
}

impl MediaFetcher {
    /// Create a fetcher rooted at `pictures_dir`, creating the directory if
    /// it does not exist yet.
    pub fn new(pictures_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let pictures_dir = pictures_dir.into();
        std::fs::create_dir_all(&pictures_dir)?;
        Ok(Self {
            client: Client::new(),
            pictures_dir,
        })
    }

    /// Directory the thumbnails are written into.
    #[must_use]
    pub fn pictures_dir(&self) -> &Path {
        &self.pictures_dir
    }

    /// Download the image at `source_url` and return its local filename, or
    /// `None` if the URL does not qualify or the download fails.
    pub async fn fetch_image(&self, source_url: &str, article_title: &str) -> Option<String> {
        match Url::parse(source_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                warn!(title = article_title, url = source_url, "invalid image URL for article");
                return None;
            }
        }

        let file_name = image_file_name(article_title, Local::now());
        let save_path = self.pictures_dir.join(&file_name);

        match self.download(source_url, &save_path).await {
            Ok(()) => {
                debug!(title = article_title, file = %file_name, "thumbnail downloaded");
                Some(file_name)
            }
            Err(e) => {
                warn!(title = article_title, url = source_url, "failed to download image: {e:#}");
                None
            }
        }
    }

    /// Stream the response body to `save_path`.
    async fn download(&self, url: &str, save_path: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", CHROME_USER_AGENT)
            .send()
            .await
            .context("failed to request image")?;

        if !response.status().is_success() {
            anyhow::bail!("image download failed with status: {}", response.status());
        }

        let mut file = tokio::fs::File::create(save_path)
            .await
            .context("failed to create image file")?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("failed to read image chunk")?;
            file.write_all(&chunk)
                .await
                .context("failed to write image chunk")?;
        }
        file.flush().await.context("failed to flush image file")?;

        Ok(())
    }
}

/// Synthesize the local filename: title with spaces replaced by underscores,
/// a second-precision timestamp, `.jpg`. Two downloads of identically-titled
/// articles within the same second collide; last write wins.
fn image_file_name(title: &str, now: DateTime<Local>) -> String {
    let stem = sanitize_filename::sanitize(title.replace(' ', "_"));
    format!("{}_{}.jpg", stem, now.format("%Y%m%d%H%M%S"))
}
