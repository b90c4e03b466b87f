//! Locators for the news portal's markup
//!
//! Every selector below is tied to specific site markup and is
//! compatibility-sensitive: if the portal ships the same classes and ids,
//! these must stay byte-for-byte as they are.

/// Search input on the portal landing page
pub const SEARCH_BOX_SELECTOR: &str = "#ybar-sbq";

/// "News" navigation link on the results tab. Matched by XPath because the
/// link is identified by its visible text alongside the `d-ib` class.
pub const NEWS_LINK_XPATH: &str =
    r#"//body//a[contains(@class, "d-ib") and contains(text(),"News")]"#;

/// Results list that must be visible before collection starts
pub const RESULTS_CONTAINER_SELECTOR: &str = "ol.mb-15.reg.searchCenterMiddle";

/// One news-result card inside the results list
pub const ARTICLE_SELECTOR: &str = "ol.mb-15.reg.searchCenterMiddle li div.dd.NewsArticle";

/// Headline anchor; carries both the `title` and `href` attributes
pub const TITLE_SELECTOR: &str = "h4.s-title.fz-16.lh-20 > a";

/// Outlet name span
pub const SOURCE_SELECTOR: &str = "span.s-source.mr-5.cite-co";

/// Relative-age span, e.g. `"· 3 hours ago"`
pub const TIME_SELECTOR: &str = "span.fc-2nd.s-time.mr-8";

/// Teaser paragraph
pub const DESCRIPTION_SELECTOR: &str = "p.s-desc";

/// Thumbnail image inside its anchor
pub const THUMBNAIL_SELECTOR: &str = "a.thmb img";
