use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use anyhow::Result;
use scout_sdk::Client;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = cli.config_path()?;
    tracing::debug!(path = %config_path.display(), "Using config");

    let format = cli.format;
    let command = match cli.command {
        Commands::Config { write } => return handlers::config::handle(&config_path, write, format),
        command => command,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = Client::connect(&config_path)?;

    runtime.block_on(async move {
        let result = match command {
            Commands::Scan { paths, verbose } => {
                handlers::scan::handle(&client, &paths, verbose, format).await
            }
            Commands::Open { id, roots } => {
                handlers::open::handle(&client, &id, &roots, format).await
            }
            Commands::Watch { paths, max_events } => {
                handlers::watch::handle(&client, &paths, max_events, format).await
            }
            Commands::Config { .. } => Ok(()),
        };
        client.shutdown().await;
        result
    })
}
