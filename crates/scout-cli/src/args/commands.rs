use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Scan directories for projects")]
    Scan {
        /// Roots to scan; the configured default directories when omitted
        paths: Vec<PathBuf>,

        #[arg(long, short)]
        verbose: bool,
    },

    #[command(about = "Scan, then open a project by ID")]
    Open {
        id: String,

        /// Roots to scan before opening (repeatable)
        #[arg(long = "root")]
        roots: Vec<PathBuf>,
    },

    #[command(about = "Watch discovered projects and re-scan on change")]
    Watch {
        paths: Vec<PathBuf>,

        /// Exit after this many change notifications
        #[arg(long)]
        max_events: Option<usize>,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        write: bool,
    },
}
