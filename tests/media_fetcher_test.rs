//! Thumbnail download behavior against a local HTTP server

use newsharvest::MediaFetcher;

#[tokio::test]
async fn downloads_image_and_returns_local_filename() {
    let mut server = mockito::Server::new_async().await;
    let body = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let mock = server
        .mock("GET", "/thumb.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(body.clone())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = MediaFetcher::new(dir.path().join("pictures")).unwrap();

    let name = fetcher
        .fetch_image(&format!("{}/thumb.jpg", server.url()), "Test article")
        .await
        .expect("download should succeed");

    assert!(name.starts_with("Test_article_"));
    assert!(name.ends_with(".jpg"));
    let saved = fetcher.pictures_dir().join(&name);
    assert_eq!(std::fs::read(saved).unwrap(), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_yields_none() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/gone.jpg")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = MediaFetcher::new(dir.path().join("pictures")).unwrap();

    let result = fetcher
        .fetch_image(&format!("{}/gone.jpg", server.url()), "Gone article")
        .await;

    assert!(result.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn non_http_urls_are_rejected_without_a_request() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MediaFetcher::new(dir.path().join("pictures")).unwrap();

    assert!(fetcher.fetch_image("data:image/gif;base64,R0lGOD", "A").await.is_none());
    assert!(fetcher.fetch_image("ftp://example.com/a.jpg", "A").await.is_none());
    assert!(fetcher.fetch_image("not a url at all", "A").await.is_none());

    // Nothing may have been written for rejected URLs.
    let entries: Vec<_> = std::fs::read_dir(fetcher.pictures_dir()).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn transport_errors_yield_none() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MediaFetcher::new(dir.path().join("pictures")).unwrap();

    // Nothing listens on this port.
    let result = fetcher
        .fetch_image("http://127.0.0.1:9/unreachable.jpg", "Unreachable")
        .await;
    assert!(result.is_none());
}
