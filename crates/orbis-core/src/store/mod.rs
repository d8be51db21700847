//! Store gateway for country records.
//!
//! [`CountryStore`] is the only way the rest of Orbis touches persisted data.
//! It is object-safe so the serving layer and the sync orchestrator can hold
//! an `Arc<dyn CountryStore>` injected at startup.
//!
//! # Uniqueness
//!
//! No implementation enforces a unique key. Callers must check
//! [`CountryStore::exists`] before [`CountryStore::insert`]; the check and the
//! insert are two separate calls with no transaction around them.
//!
//! # Implementations
//!
//! - [`ClickHouseStore`] - production store over the ClickHouse HTTP interface
//! - [`MemoryStore`] - in-process store for tests and local runs

mod clickhouse;
mod memory;

pub use self::clickhouse::{ClickHouseStore, ClickHouseStoreConfig};
pub use self::memory::MemoryStore;

use async_trait::async_trait;

use crate::model::{Country, PopulationStats};
use crate::{Error, Result};

/// Persistence operations for country records.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// Human-readable backend name (used in logs and health output).
    fn name(&self) -> &'static str;

    /// Verify connectivity and create the table if it does not exist.
    ///
    /// Safe to call on every start. Fails with [`crate::Error::Connection`]
    /// when the backend is unreachable.
    async fn initialize(&self) -> Result<()>;

    /// Whether a record with this name exists, ignoring case.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Append one record. Does not check for an existing record.
    async fn insert(&self, country: &Country) -> Result<()>;

    /// Case-insensitive point lookup. `Ok(None)` means no such record.
    async fn get_by_name(&self, name: &str) -> Result<Option<Country>>;

    /// Like [`CountryStore::get_by_name`], but a missing record is
    /// [`Error::NotFound`] carrying the requested name.
    async fn require_by_name(&self, name: &str) -> Result<Country> {
        self.get_by_name(name)
            .await?
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Every record, ordered by name ascending.
    async fn list_all(&self) -> Result<Vec<Country>>;

    /// Population totals and the most populated country.
    ///
    /// Returns `Ok(None)` when the store holds no records.
    async fn aggregate_stats(&self) -> Result<Option<PopulationStats>>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64>;
}
