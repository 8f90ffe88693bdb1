//! scout-sdk: discover and watch `.bmad-core` projects.
//!
//! # Overview
//!
//! `scout-sdk` is the stable surface over the scanner runtime. It exposes the
//! request/response shapes a transport layer would carry (`scan`, `open`),
//! a snapshot accessor for the registry, and an async stream of change
//! notifications.
//!
//! # Quickstart
//!
//! ```no_run
//! use scout_sdk::{Client, types::ScanRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//!
//! let response = client.scan(ScanRequest::default()).await;
//! for project in &response.projects {
//!     println!("{} {}", project.id, project.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Reacting to changes
//!
//! ```no_run
//! use scout_sdk::{Client, WatchEvent, types::ScanRequest};
//! use futures::stream::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! client.scan(ScanRequest::default()).await;
//!
//! let mut stream = client.watch()?;
//! while let Some(event) = stream.next().await {
//!     if let WatchEvent::ProjectChanged(project) = event {
//!         println!("changed: {}", project.name);
//!         client.scan(ScanRequest::default()).await;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `scout-types`: project records and request/response shapes
//! - `scout-core`: path validation and identity
//! - `scout-runtime`: scanning, registry cache and watches

pub mod client;
pub mod error;
pub mod watch;

pub use client::Client;
pub use error::{Error, Result};
pub use watch::{LiveStream, WatchEvent};

pub mod types {
    pub use scout_core::{PathPolicy, Rejection, project_id_from_path};
    pub use scout_runtime::{ScanConfig, ScanOutcome, ScanStats, WatchBackend};
    pub use scout_types::*;
}
