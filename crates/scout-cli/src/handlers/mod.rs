pub mod config;
pub mod open;
pub mod scan;
pub mod watch;

use anyhow::Result;
use scout_types::ScanRequest;
use std::path::PathBuf;

/// Request for `paths`, made absolute against the working directory.
/// No paths means the configured default directories.
pub(crate) fn scan_request(paths: &[PathBuf]) -> Result<ScanRequest> {
    if paths.is_empty() {
        return Ok(ScanRequest::default());
    }

    let absolute = paths
        .iter()
        .map(|p| std::path::absolute(p).map(|abs| abs.to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(ScanRequest::with_paths(absolute))
}
