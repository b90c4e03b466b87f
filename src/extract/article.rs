//! The Article entity and its construction policy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Literal substituted for any optional field that could not be extracted.
pub const SENTINEL: &str = "N/A";

/// One discovered news item.
///
/// `title` and `link` are guaranteed non-empty; every other field holds
/// either meaningful text or the [`SENTINEL`] literal, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    pub title: String,

    /// Absolute URL of the article
    pub link: String,

    /// Publishing outlet name
    pub source: String,

    /// Raw relative age as shown by the portal, e.g. `"· 3 hours ago"`
    pub relative_time: String,

    /// Teaser text under the headline
    pub description: String,

    /// Local filename of the downloaded thumbnail
    pub image_reference: String,
}

/// Field values as read off one result element, before any defaulting.
///
/// Keeping the raw lookup results separate from [`Article`] makes the
/// mandatory/optional policy in [`Article::from_raw`] a pure function that
/// tests can drive without a browser.
#[derive(Debug, Clone, Default)]
pub struct RawArticleFields {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub relative_time: Option<String>,
    pub description: Option<String>,
    pub image_reference: Option<String>,
}

/// Per-article extraction failure. The caller logs it and skips the element;
/// one bad article never aborts the batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// A field the article cannot exist without was absent or empty.
    #[error("mandatory field `{0}` is missing or empty")]
    MissingMandatory(&'static str),
}

impl Article {
    /// Apply the field policy: `title` and `link` must be present and
    /// non-empty or the whole article is rejected; every other field falls
    /// back to [`SENTINEL`] individually.
    pub fn from_raw(raw: RawArticleFields) -> Result<Self, ExtractionError> {
        let title = mandatory(raw.title, "title")?;
        let link = mandatory(raw.link, "link")?;

        Ok(Self {
            title,
            link,
            source: optional(raw.source),
            relative_time: optional(raw.relative_time),
            description: optional(raw.description),
            image_reference: optional(raw.image_reference),
        })
    }
}

fn mandatory(field: Option<String>, name: &'static str) -> Result<String, ExtractionError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ExtractionError::MissingMandatory(name)),
    }
}

/// Empty strings collapse to the sentinel as well; the working set never
/// carries an empty optional field.
fn optional(field: Option<String>) -> String {
    match field {
        Some(value) if !value.is_empty() => value,
        _ => SENTINEL.to_string(),
    }
}
