//! The mandatory/optional field policy for article construction

use newsharvest::{Article, ExtractionError, RawArticleFields, SENTINEL};

fn populated() -> RawArticleFields {
    RawArticleFields {
        title: Some("Car sales up".to_string()),
        link: Some("https://example.com/car-sales".to_string()),
        source: Some("Example Wire".to_string()),
        relative_time: Some("· 3 hours ago".to_string()),
        description: Some("Dealers report a strong quarter.".to_string()),
        image_reference: Some("Car_sales_up_20240305143059.jpg".to_string()),
    }
}

#[test]
fn fully_populated_element_keeps_every_field() {
    let article = Article::from_raw(populated()).unwrap();
    assert_eq!(article.title, "Car sales up");
    assert_eq!(article.link, "https://example.com/car-sales");
    assert_eq!(article.source, "Example Wire");
    assert_eq!(article.relative_time, "· 3 hours ago");
    assert_eq!(article.description, "Dealers report a strong quarter.");
    assert_eq!(article.image_reference, "Car_sales_up_20240305143059.jpg");
}

#[test]
fn missing_optionals_become_the_sentinel() {
    let raw = RawArticleFields {
        source: None,
        relative_time: None,
        description: None,
        image_reference: None,
        ..populated()
    };
    let article = Article::from_raw(raw).unwrap();
    assert_eq!(article.source, SENTINEL);
    assert_eq!(article.relative_time, SENTINEL);
    assert_eq!(article.description, SENTINEL);
    assert_eq!(article.image_reference, SENTINEL);
}

#[test]
fn empty_optionals_become_the_sentinel_too() {
    let raw = RawArticleFields {
        source: Some(String::new()),
        description: Some(String::new()),
        ..populated()
    };
    let article = Article::from_raw(raw).unwrap();
    assert_eq!(article.source, SENTINEL);
    assert_eq!(article.description, SENTINEL);
}

#[test]
fn missing_title_rejects_the_article() {
    let raw = RawArticleFields {
        title: None,
        ..populated()
    };
    assert_eq!(
        Article::from_raw(raw).unwrap_err(),
        ExtractionError::MissingMandatory("title")
    );
}

#[test]
fn empty_link_rejects_the_article() {
    let raw = RawArticleFields {
        link: Some(String::new()),
        ..populated()
    };
    assert_eq!(
        Article::from_raw(raw).unwrap_err(),
        ExtractionError::MissingMandatory("link")
    );
}

/// A results page with three elements: one fully populated, one missing its
/// description, one missing its mandatory title. Exactly two articles
/// survive, the second with the sentinel description.
#[test]
fn batch_isolates_the_bad_element() {
    let elements = vec![
        populated(),
        RawArticleFields {
            description: None,
            ..populated()
        },
        RawArticleFields {
            title: None,
            ..populated()
        },
    ];

    let articles: Vec<Article> = elements
        .into_iter()
        .filter_map(|raw| Article::from_raw(raw).ok())
        .collect();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].description, SENTINEL);
}
