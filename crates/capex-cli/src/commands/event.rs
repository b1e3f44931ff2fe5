//! Handle-event command - replay a storage notification against local stores.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use capex_handler::store::{LocalObjectStore, LocalSecretStore};
use capex_handler::{EventHandler, StorageEvent};

use super::config::load_config;

/// Arguments for the handle-event command.
#[derive(Args)]
pub struct EventArgs {
    /// Event notification JSON file
    #[arg(required = true)]
    event: PathBuf,
}

pub async fn run(args: EventArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.event.exists() {
        anyhow::bail!("Event file not found: {}", args.event.display());
    }

    let event: StorageEvent = serde_json::from_str(&fs::read_to_string(&args.event)?)?;
    debug!(
        "Using storage root {} and secrets file {}",
        config.handler.storage_root.display(),
        config.handler.secrets_file.display()
    );

    let handler = EventHandler::new(
        LocalObjectStore::new(&config.handler.storage_root),
        LocalSecretStore::new(&config.handler.secrets_file),
        &config.handler,
    );

    let response = handler.handle(&event)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
