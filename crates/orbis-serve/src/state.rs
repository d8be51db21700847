//! Application state shared across all request handlers.

use std::sync::Arc;

use orbis_core::{ClickHouseStore, CountryStore};
use orbis_ingest::{CountrySource, RestCountriesSource, SyncOrchestrator};

use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// The store handle is created once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Country store used by every read handler.
    pub store: Arc<dyn CountryStore>,

    /// Sync orchestrator behind `/filldb` and `/api/v1/sync`.
    pub sync: Arc<SyncOrchestrator>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the production state: ClickHouse store and REST dataset source.
    ///
    /// The store is not initialized here; call
    /// [`CountryStore::initialize`] on [`AppState::store`] before serving.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(ClickHouseStore::new(config.ingest.clickhouse.clone()));
        let source = Arc::new(RestCountriesSource::new(config.ingest.source_url.clone()));
        Self::from_parts(config, store, source)
    }

    /// Create state from explicit collaborators.
    pub fn from_parts(
        config: Config,
        store: Arc<dyn CountryStore>,
        source: Arc<dyn CountrySource>,
    ) -> Self {
        let sync = Arc::new(SyncOrchestrator::new(source, Arc::clone(&store)));

        tracing::info!(
            store = store.name(),
            source = %config.ingest.source_url,
            "application state initialized"
        );

        Self {
            store,
            sync,
            config: Arc::new(config),
        }
    }
}
