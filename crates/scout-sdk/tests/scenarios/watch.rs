//! Watch Stream Tests
//!
//! Verifies that the live stream:
//! - Delivers a change when a project's marker directory goes away
//! - Stays quiet for unrelated files
//! - Ends once the client shuts down

use anyhow::Result;
use futures::stream::StreamExt;
use scout_sdk::types::ScanRequest;
use scout_sdk::{Client, WatchEvent};
use scout_testing::TestWorld;
use std::time::Duration;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

async fn scanned_client(world: &TestWorld) -> Client {
    let client = Client::new(world.config());
    client
        .scan(ScanRequest::with_paths([world
            .path("Projects")
            .to_string_lossy()
            .into_owned()]))
        .await;
    client
}

#[tokio::test]
async fn test_stream_delivers_marker_change() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/alpha");
    let client = scanned_client(&world).await;
    let mut stream = client.watch()?;

    world.remove_marker("Projects/alpha");

    let event = tokio::time::timeout(EVENT_TIMEOUT, stream.next())
        .await?
        .expect("stream ended early");
    match event {
        WatchEvent::ProjectChanged(project) => assert_eq!(project.name, "alpha"),
        other => panic!("unexpected event: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_stream_ignores_unrelated_files() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/alpha");
    let client = scanned_client(&world).await;
    let mut stream = client.watch()?;

    std::fs::write(world.path("Projects/alpha/README.md"), "# alpha")?;
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(stream.try_next().is_none());
    Ok(())
}

#[tokio::test]
async fn test_rescan_after_change_drops_project() -> Result<()> {
    let world = TestWorld::new()
        .with_project("Projects/alpha")
        .with_project("Projects/beta");
    let client = scanned_client(&world).await;
    let mut stream = client.watch()?;

    world.remove_marker("Projects/alpha");
    tokio::time::timeout(EVENT_TIMEOUT, stream.next()).await?;

    let response = client
        .scan(ScanRequest::with_paths([world
            .path("Projects")
            .to_string_lossy()
            .into_owned()]))
        .await;
    assert_eq!(response.projects.len(), 1);
    assert_eq!(response.projects[0].name, "beta");
    Ok(())
}

#[tokio::test]
async fn test_shutdown_ends_stream() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/alpha");
    let client = scanned_client(&world).await;
    let mut stream = client.watch()?;

    client.shutdown().await;
    client.shutdown().await;

    let next = tokio::time::timeout(EVENT_TIMEOUT, stream.next()).await?;
    assert!(next.is_none());
    assert!(client.cached_projects().await.is_empty());
    assert_eq!(client.active_watch_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_new_subscriber_ends_previous_stream() -> Result<()> {
    let world = TestWorld::new().with_project("Projects/alpha");
    let client = scanned_client(&world).await;
    let mut first = client.watch()?;
    let _second = client.watch()?;

    let next = tokio::time::timeout(EVENT_TIMEOUT, first.next()).await?;
    assert!(next.is_none());
    Ok(())
}
