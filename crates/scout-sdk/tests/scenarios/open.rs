use anyhow::Result;
use scout_sdk::Client;
use scout_sdk::types::ScanRequest;
use scout_testing::TestWorld;

#[tokio::test]
async fn test_open_missing_id_on_empty_cache() {
    let world = TestWorld::new();
    let client = Client::new(world.config());

    let response = client.open("missing-id").await;

    assert!(!response.success);
    assert!(response.project.is_none());
    assert_eq!(
        response.error.as_deref(),
        Some("Project with ID missing-id not found")
    );
}

#[tokio::test]
async fn test_open_updates_last_accessed() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let client = Client::new(world.config());
    let scanned = client
        .scan(ScanRequest::with_paths([world
            .path("Projects")
            .to_string_lossy()
            .into_owned()]))
        .await;
    let discovered = &scanned.projects[0];

    let response = client.open(discovered.id.as_str()).await;

    assert!(response.success);
    let opened = response.project.expect("project in response");
    assert_eq!(opened.id, discovered.id);
    assert!(opened.last_accessed >= discovered.last_accessed);

    let cached = client.cached_projects().await;
    assert_eq!(cached[0].last_accessed, opened.last_accessed);
    Ok(())
}

#[tokio::test]
async fn test_open_project_maps_missing_to_not_found() {
    let world = TestWorld::new();
    let client = Client::new(world.config());

    let err = client.open_project("0123456789abcdef").await.unwrap_err();
    assert!(matches!(err, scout_sdk::Error::NotFound(_)));
}

#[tokio::test]
async fn test_open_after_shutdown_fails() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let client = Client::new(world.config());
    let scanned = client
        .scan(ScanRequest::with_paths([world
            .path("Projects")
            .to_string_lossy()
            .into_owned()]))
        .await;

    client.shutdown().await;

    let response = client.open(scanned.projects[0].id.as_str()).await;
    assert!(!response.success);
    Ok(())
}
