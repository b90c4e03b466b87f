//! Per-article field extraction from the results page
//!
//! Walks every result element on the news tab, reads the raw field values,
//! and applies the [`Article`] construction policy. Extraction failures are
//! isolated per element: a result missing its mandatory fields is logged and
//! skipped while the rest of the batch proceeds.

mod article;
pub mod selectors;

pub use article::{Article, ExtractionError, RawArticleFields, SENTINEL};

use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use tracing::{error, info, warn};

use crate::media::MediaFetcher;
use selectors::{
    ARTICLE_SELECTOR, DESCRIPTION_SELECTOR, SOURCE_SELECTOR, THUMBNAIL_SELECTOR, TIME_SELECTOR,
    TITLE_SELECTOR,
};

/// Collect every article visible on the results page.
///
/// An empty page yields an empty working set, not an error. Thumbnails are
/// resolved through the [`MediaFetcher`]; a failed download leaves the
/// article in the set without an image.
pub async fn collect_articles(page: &Page, fetcher: &MediaFetcher) -> Vec<Article> {
    let elements = match page.find_elements(ARTICLE_SELECTOR).await {
        Ok(elements) => elements,
        Err(e) => {
            warn!("failed to enumerate result elements: {e}");
            return Vec::new();
        }
    };

    if elements.is_empty() {
        info!("no articles found");
        return Vec::new();
    }

    info!(count = elements.len(), "found result elements");

    let mut articles = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match extract_article(element, fetcher).await {
            Ok(article) => articles.push(article),
            Err(e) => error!("skipping result {}: {e}", index + 1),
        }
    }
    articles
}

/// Extract one result element into an [`Article`].
async fn extract_article(
    element: &Element,
    fetcher: &MediaFetcher,
) -> Result<Article, ExtractionError> {
    let raw = read_raw_fields(element, fetcher).await;
    Article::from_raw(raw)
}

/// Read every field off the element without judging it; defaulting and the
/// mandatory check happen in [`Article::from_raw`].
async fn read_raw_fields(element: &Element, fetcher: &MediaFetcher) -> RawArticleFields {
    let (title, link) = match element.find_element(TITLE_SELECTOR).await {
        Ok(anchor) => (
            anchor.attribute("title").await.ok().flatten(),
            anchor.attribute("href").await.ok().flatten(),
        ),
        Err(_) => (None, None),
    };

    let source = element_text(element, SOURCE_SELECTOR).await;
    let relative_time = element_text(element, TIME_SELECTOR).await;
    let description = element_text(element, DESCRIPTION_SELECTOR).await;

    // Without a title there is no filename to download under, and the
    // article is about to be rejected anyway.
    let image_reference = match &title {
        Some(title) => fetch_thumbnail(element, fetcher, title).await,
        None => None,
    };

    RawArticleFields {
        title,
        link,
        source,
        relative_time,
        description,
        image_reference,
    }
}

/// Text content of a child element, `None` when the child is absent or the
/// driver cannot read it.
async fn element_text(element: &Element, selector: &str) -> Option<String> {
    match element.find_element(selector).await {
        Ok(child) => child.inner_text().await.ok().flatten(),
        Err(_) => None,
    }
}

/// Resolve the thumbnail `src` and hand it to the media fetcher. Any failure
/// along the way leaves the article without an image.
async fn fetch_thumbnail(
    element: &Element,
    fetcher: &MediaFetcher,
    title: &str,
) -> Option<String> {
    let image = match element.find_element(THUMBNAIL_SELECTOR).await {
        Ok(image) => image,
        Err(_) => {
            warn!(title, "thumbnail element not found for article");
            return None;
        }
    };

    let source_url = image.attribute("src").await.ok().flatten()?;
    fetcher.fetch_image(&source_url, title).await
}
