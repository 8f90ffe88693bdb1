mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Discover and watch .bmad-core projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $SCOUT_PATH/config.toml or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(scout_core::expand_tilde(path)),
            None => Ok(scout_runtime::ScanConfig::default_path()?),
        }
    }
}
