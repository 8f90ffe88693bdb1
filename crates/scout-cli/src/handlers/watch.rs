use super::scan_request;
use crate::output::{ProjectListView, WatchLine, print_json_line};
use crate::types::OutputFormat;
use anyhow::Result;
use futures::stream::StreamExt;
use scout_sdk::{Client, WatchEvent};
use scout_types::ProjectRecord;
use std::path::PathBuf;

pub async fn handle(
    client: &Client,
    paths: &[PathBuf],
    max_events: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let request = scan_request(paths)?;
    let outcome = client.scan_outcome(&request).await?;

    if outcome.projects.is_empty() {
        if format == OutputFormat::Json {
            print_json_line(&WatchLine::Watching { projects: &[] })?;
        } else {
            println!("No projects to watch");
        }
        return Ok(());
    }

    let mut stream = client.watch()?;
    match format {
        OutputFormat::Json => print_json_line(&WatchLine::Watching {
            projects: &outcome.projects,
        })?,
        OutputFormat::Plain => {
            print!("{}", ProjectListView::new(&outcome.projects));
            println!("Watching for changes...");
        }
    }

    let mut changes = 0;
    while let Some(event) = stream.next().await {
        match event {
            WatchEvent::ProjectChanged(project) => {
                let projects = client.scan_outcome(&request).await?.projects;
                print_change(&project, &projects, format)?;

                changes += 1;
                if max_events.is_some_and(|max| changes >= max) {
                    break;
                }
            }
            WatchEvent::Error {
                project_id,
                message,
            } => {
                if format == OutputFormat::Json {
                    print_json_line(&WatchLine::Error {
                        project_id: &project_id,
                        message: &message,
                    })?;
                } else {
                    eprintln!("Watch error for {}: {}", project_id, message);
                }
            }
        }
    }

    Ok(())
}

fn print_change(
    project: &ProjectRecord,
    projects: &[ProjectRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json_line(&WatchLine::ProjectChanged { project })?;
            print_json_line(&WatchLine::Rescanned { projects })?;
        }
        OutputFormat::Plain => {
            println!("Changed: {} ({})", project.name, project.path.display());
            print!("{}", ProjectListView::new(projects));
        }
    }
    Ok(())
}
