//! Server configuration loaded from environment variables.

use std::path::PathBuf;

use orbis_ingest::IngestConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Run one sync right after the store is initialized.
    pub sync_on_start: bool,

    /// Store and dataset source settings.
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `ORBIS_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `ORBIS_STATIC_DIR`: Static files directory (default: "./static")
    /// - `ORBIS_SYNC_ON_START`: "1"/"true" to sync at startup (default: off)
    ///
    /// plus everything read by [`IngestConfig::from_env`].
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("ORBIS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let static_dir = std::env::var("ORBIS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));

        let sync_on_start = std::env::var("ORBIS_SYNC_ON_START")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let ingest = IngestConfig::from_env()?;

        tracing::info!(
            bind_addr = %bind_addr,
            static_dir = %static_dir.display(),
            sync_on_start,
            "server configuration loaded"
        );

        Ok(Self {
            bind_addr,
            static_dir,
            sync_on_start,
            ingest,
        })
    }
}
