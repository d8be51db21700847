//! One-shot country sync.
//!
//! Ensures the ClickHouse table exists, fetches the full dataset, and inserts
//! every country that is not stored yet.
//!
//! # Usage
//!
//! ```bash
//! # Sync with settings from the environment / .env
//! orbis-sync
//!
//! # Print the full report as JSON
//! orbis-sync --json
//!
//! # Override the dataset endpoint
//! orbis-sync --source-url http://mirror.local/v3.1/all
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use orbis_core::{ClickHouseStore, CountryStore};
use orbis_ingest::{IngestConfig, RestCountriesSource, SyncOrchestrator};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Sync the country dataset into ClickHouse.
#[derive(Parser, Debug)]
#[command(name = "orbis-sync")]
#[command(about = "Fetch the country dataset and insert new records into ClickHouse")]
#[command(version)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Dataset endpoint (overrides ORBIS_SOURCE_URL)
    #[arg(long)]
    source_url: Option<String>,

    /// Print the sync report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = IngestConfig::from_env()?;
    if let Some(url) = args.source_url {
        config.source_url = url;
    }

    let store = Arc::new(ClickHouseStore::new(config.clickhouse.clone()));
    store
        .initialize()
        .await
        .context("failed to initialize ClickHouse store")?;

    let source = Arc::new(RestCountriesSource::new(config.source_url.clone()));
    let sync = SyncOrchestrator::new(source, store);

    let report = sync.sync_from_source().await.context("sync failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
