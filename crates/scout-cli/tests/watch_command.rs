//! Watch Command Tests
//!
//! Verifies that `scout watch`:
//! - Prints the watched projects, then a change line when a marker goes away
//! - Re-scans after each change
//! - Exits immediately when there is nothing to watch

use anyhow::{Context, Result};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use scout_testing::TestWorld;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

const LINE_TIMEOUT: Duration = Duration::from_secs(10);

fn wait_for_line(rx: &mpsc::Receiver<String>, needle: &str) -> Result<Vec<String>> {
    let mut seen = Vec::new();
    loop {
        let line = rx
            .recv_timeout(LINE_TIMEOUT)
            .with_context(|| format!("waiting for {:?}, saw {:?}", needle, seen))?;
        let done = line.contains(needle);
        seen.push(line);
        if done {
            return Ok(seen);
        }
    }
}

#[test]
fn test_watch_reports_change_and_rescans() -> Result<()> {
    let world = TestWorld::new()
        .with_project("Projects/alpha")
        .with_project("Projects/beta");
    let config_path = world.write_config(&world.config())?;

    let mut child = Command::new(env!("CARGO_BIN_EXE_scout"))
        .arg("--config")
        .arg(&config_path)
        .arg("watch")
        .arg(world.path("Projects"))
        .args(["--max-events", "1"])
        .env_remove("SCOUT_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let stdout = child.stdout.take().context("stdout should be piped")?;
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(|l| l.ok()) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let result = (|| -> Result<()> {
        let initial = wait_for_line(&rx, "Watching for changes")?;
        assert!(initial.iter().any(|l| l.contains("Found 2 projects")));

        world.remove_marker("Projects/alpha");

        wait_for_line(&rx, "Changed: alpha")?;
        wait_for_line(&rx, "Found 1 project")?;
        Ok(())
    })();

    if result.is_err() {
        let _ = child.kill();
    }
    let status = child.wait()?;
    result?;
    assert!(status.success());
    Ok(())
}

#[test]
fn test_watch_with_no_projects_exits() {
    let world = TestWorld::new().with_dir("Projects");

    let mut cmd = cargo_bin_cmd!("scout");
    world
        .configure_command(&mut cmd)
        .arg("watch")
        .arg(world.path("Projects"))
        .timeout(LINE_TIMEOUT);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No projects to watch"));
}
