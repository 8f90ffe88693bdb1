pub mod config;
pub mod error;
pub mod registry;
pub mod scanner;
pub mod service;
pub mod watch;

pub use config::{ScanConfig, ScanSection, SecuritySection, WatchBackend, WatchSection};
pub use error::{Error, Result};
pub use registry::ProjectRegistry;
pub use scanner::{ScanOutcome, ScanStats, Scanner};
pub use service::ProjectScanner;
pub use watch::{Notifier, WatchEvent};
