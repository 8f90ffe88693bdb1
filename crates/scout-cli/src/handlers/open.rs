use super::scan_request;
use crate::output::{ProjectView, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use scout_sdk::Client;
use std::path::PathBuf;

/// The registry only lives for one process, so a scan always precedes the
/// lookup.
pub async fn handle(
    client: &Client,
    id: &str,
    roots: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let request = scan_request(roots)?;
    client.scan_outcome(&request).await?;

    let response = client.open(id).await;

    if format == OutputFormat::Json {
        print_json(&response)?;
    }

    match response.project {
        Some(project) if response.success => {
            if format == OutputFormat::Plain {
                print!("{}", ProjectView::new(&project));
            }
            Ok(())
        }
        _ => {
            let message = response
                .error
                .unwrap_or_else(|| format!("Project with ID {} not found", id));
            anyhow::bail!(message)
        }
    }
}
