use crate::output::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use scout_runtime::ScanConfig;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ConfigView<'a> {
    path: &'a Path,
    exists: bool,
    config: &'a ScanConfig,
}

pub fn handle(path: &Path, write: bool, format: OutputFormat) -> Result<()> {
    let config = ScanConfig::load_from(path)?;
    config.validate()?;

    if write {
        config.save_to(path)?;
        tracing::info!(path = %path.display(), "Wrote config");
    }

    match format {
        OutputFormat::Json => print_json(&ConfigView {
            path,
            exists: path.exists(),
            config: &config,
        })?,
        OutputFormat::Plain => {
            if write {
                println!("# Wrote {}", path.display());
            } else if path.exists() {
                println!("# {}", path.display());
            } else {
                println!("# {} (not found, showing defaults)", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
