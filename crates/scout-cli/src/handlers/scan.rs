use super::scan_request;
use crate::output::{ProjectListView, StatsView, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use scout_sdk::Client;
use scout_types::ScanResponse;
use std::path::PathBuf;

pub async fn handle(
    client: &Client,
    paths: &[PathBuf],
    verbose: bool,
    format: OutputFormat,
) -> Result<()> {
    let request = scan_request(paths)?;

    let outcome = match client.scan_outcome(&request).await {
        Ok(outcome) => outcome,
        Err(err) => {
            if format == OutputFormat::Json {
                print_json(&ScanResponse::failed(err.to_string()))?;
            }
            return Err(err.into());
        }
    };

    match format {
        OutputFormat::Json => print_json(&ScanResponse::ok(outcome.projects))?,
        OutputFormat::Plain => {
            print!("{}", ProjectListView::new(&outcome.projects));
            if verbose {
                print!("{}", StatsView::new(&outcome.stats));
            }
        }
    }

    Ok(())
}
