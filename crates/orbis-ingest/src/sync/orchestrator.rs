//! Fetch → check → insert driver.

use std::sync::Arc;

use chrono::Utc;
use orbis_core::{Country, CountryStore, Result};
use tokio::sync::Mutex;

use super::SyncReport;
use crate::source::CountrySource;

/// Drives a full sync from a [`CountrySource`] into a [`CountryStore`].
///
/// Both collaborators are injected so the same orchestrator runs against
/// ClickHouse in production and [`orbis_core::MemoryStore`] in tests.
///
/// Runs on one orchestrator are serialized: the check-then-insert loop holds
/// an async mutex, so two concurrent syncs cannot both see a name as missing.
/// Writers in other processes are not covered; the store itself has no
/// unique constraint.
pub struct SyncOrchestrator {
    source: Arc<dyn CountrySource>,
    store: Arc<dyn CountryStore>,
    lock: Mutex<()>,
}

impl SyncOrchestrator {
    pub fn new(source: Arc<dyn CountrySource>, store: Arc<dyn CountryStore>) -> Self {
        Self {
            source,
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn CountryStore> {
        &self.store
    }

    /// Fetch the dataset and insert every record not already stored.
    ///
    /// Aborts on the first store failure without rolling back earlier
    /// inserts. A fetch failure aborts before any store call.
    pub async fn sync_from_source(&self) -> Result<SyncReport> {
        let _guard = self.lock.lock().await;

        let started_at = Utc::now();
        let records = self.source.fetch_all().await?;
        tracing::info!(
            source = self.source.name(),
            store = self.store.name(),
            count = records.len(),
            "starting sync"
        );

        let mut report = SyncReport::new(started_at, records.len());

        for record in records {
            let country = Country::from(record);

            if country.name.trim().is_empty() {
                tracing::warn!(?country, "skipping record without a name");
                report.invalid += 1;
                continue;
            }

            if let Err(e) = self.sync_one(&country, &mut report).await {
                tracing::error!(
                    country = %country.name,
                    inserted = report.inserted_count(),
                    error = %e,
                    "sync aborted"
                );
                return Err(e);
            }
        }

        report.finished_at = Utc::now();
        tracing::info!(
            fetched = report.fetched,
            inserted = report.inserted_count(),
            skipped = report.skipped_count(),
            invalid = report.invalid,
            "sync complete"
        );

        Ok(report)
    }

    async fn sync_one(&self, country: &Country, report: &mut SyncReport) -> Result<()> {
        if self.store.exists(&country.name).await? {
            tracing::debug!(country = %country.name, "already stored");
            report.skipped.push(country.name.clone());
        } else {
            self.store.insert(country).await?;
            tracing::debug!(country = %country.name, "inserted");
            report.inserted.push(country.name.clone());
        }
        Ok(())
    }
}
