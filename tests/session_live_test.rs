//! Live end-to-end run against the real portal

use newsharvest::{SessionController, SessionState};

#[tokio::test]
#[ignore] // Requires a browser installation and network access
async fn full_harvest_run_writes_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = SessionController::new(dir.path()).unwrap();

    let path = controller
        .run("https://news.yahoo.com/", "car sale increase", 1)
        .await
        .unwrap();

    assert!(path.exists());
    assert_eq!(controller.state(), SessionState::Completed);
}
