//! Custom assertions for project discovery results.

use anyhow::{Context, Result};
use scout_types::ProjectRecord;
use serde_json::Value;

/// Names of `projects` in order.
pub fn project_names(projects: &[ProjectRecord]) -> Vec<&str> {
    projects.iter().map(|p| p.name.as_str()).collect()
}

/// Assert the projects were discovered with exactly these names, in order.
pub fn assert_project_names(projects: &[ProjectRecord], expected: &[&str]) -> Result<()> {
    let names = project_names(projects);
    if names != expected {
        anyhow::bail!("Expected projects {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Assert every record looks freshly discovered.
pub fn assert_fresh_records(projects: &[ProjectRecord]) -> Result<()> {
    for project in projects {
        if project.is_active {
            anyhow::bail!("Project {} should not be active", project.name);
        }
        if !project.agents.is_empty() {
            anyhow::bail!("Project {} should have no agents", project.name);
        }
        if !scout_types::is_project_id(project.id.as_str()) {
            anyhow::bail!("Project {} has malformed id {}", project.name, project.id);
        }
    }
    Ok(())
}

/// Assert that a JSON scan response holds the expected number of projects.
pub fn assert_project_count(json: &Value, expected: usize) -> Result<()> {
    let projects = json["projects"]
        .as_array()
        .context("Expected 'projects' array in JSON")?;

    if projects.len() != expected {
        anyhow::bail!("Expected {} projects, got {}", expected, projects.len());
    }

    Ok(())
}
