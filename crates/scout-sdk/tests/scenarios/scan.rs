use anyhow::Result;
use scout_sdk::Client;
use scout_sdk::types::ScanRequest;
use scout_testing::TestWorld;
use scout_testing::assertions::{assert_fresh_records, assert_project_count, assert_project_names};

fn path_string(world: &TestWorld, rel: &str) -> String {
    world.path(rel).to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_scan_reports_discovered_projects() -> Result<()> {
    let world = TestWorld::new()
        .with_project("Projects/project1")
        .with_project("Projects/project2")
        .with_file("Projects/file.txt", "");
    let client = Client::new(world.config());

    let response = client
        .scan(ScanRequest::with_paths([path_string(&world, "Projects")]))
        .await;

    assert!(response.success);
    assert!(response.error.is_none());
    assert_project_names(&response.projects, &["project1", "project2"])?;
    assert_fresh_records(&response.projects)?;
    Ok(())
}

#[tokio::test]
async fn test_scan_without_paths_uses_default_dirs() -> Result<()> {
    let world = TestWorld::new()
        .with_project("Code/app")
        .with_project("workspace/tool");
    let client = Client::new(world.config());

    let response = client.scan(ScanRequest::default()).await;

    assert!(response.success);
    assert_project_names(&response.projects, &["app", "tool"])?;
    Ok(())
}

#[tokio::test]
async fn test_scan_with_empty_path_list_scans_nothing() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let client = Client::new(world.config());

    let response = client
        .scan(ScanRequest::with_paths(Vec::<String>::new()))
        .await;

    assert!(response.success);
    assert!(response.projects.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_scan_response_wire_shape() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let client = Client::new(world.config());

    let response = client
        .scan(ScanRequest::with_paths([path_string(&world, "Projects")]))
        .await;
    let json = serde_json::to_value(&response)?;

    assert_project_count(&json, 1)?;
    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());
    let project = &json["projects"][0];
    assert_eq!(project["isActive"], false);
    assert!(project["lastAccessed"].is_string());
    assert_eq!(project["agents"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn test_cached_projects_follow_latest_scan() -> Result<()> {
    let world = TestWorld::new()
        .with_project("first/a")
        .with_project("second/b");
    let client = Client::new(world.config());

    client
        .scan(ScanRequest::with_paths([path_string(&world, "first")]))
        .await;
    client
        .scan(ScanRequest::with_paths([path_string(&world, "second")]))
        .await;

    let cached = client.cached_projects().await;
    assert_project_names(&cached, &["b"])?;
    assert_eq!(client.active_watch_count().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_clones_share_registry() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let client = Client::new(world.config());
    let other = client.clone();

    client
        .scan(ScanRequest::with_paths([path_string(&world, "Projects")]))
        .await;

    assert_eq!(other.cached_projects().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_scans_are_serialized() -> Result<()> {
    let world = TestWorld::new()
        .with_project("Projects/one")
        .with_project("Projects/two");
    let client = Client::new(world.config());
    let request = ScanRequest::with_paths([path_string(&world, "Projects")]);

    let (a, b) = tokio::join!(client.scan(request.clone()), client.scan(request));

    assert_eq!(a.projects.len(), 2);
    assert_eq!(b.projects.len(), 2);
    assert_eq!(client.active_watch_count().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_connect_rejects_invalid_config() -> Result<()> {
    let world = TestWorld::new();
    let mut config = world.config();
    config.scan.marker = "a/b".to_string();
    let path = world.write_config(&config)?;

    let err = match Client::connect(&path) {
        Ok(_) => anyhow::bail!("invalid marker should be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, scout_sdk::Error::InvalidInput(_)));
    Ok(())
}

#[tokio::test]
async fn test_connect_reads_config_file() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/app");
    let path = world.write_config(&world.config())?;

    let client = Client::connect(&path)?;
    assert_eq!(client.config().security.home.as_deref(), Some(world.home()));

    let response = client.scan(ScanRequest::default()).await;
    assert_project_names(&response.projects, &["app"])?;
    Ok(())
}
