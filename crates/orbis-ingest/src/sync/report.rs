//! Outcome of one sync run.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-record outcomes of a completed sync.
///
/// Only produced when every record was processed; an aborted sync yields an
/// error instead.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Records returned by the source.
    pub fetched: usize,
    /// Names written to the store, in processing order.
    pub inserted: Vec<String>,
    /// Names that already existed and were left untouched.
    pub skipped: Vec<String>,
    /// Records with a blank name, which are never written.
    pub invalid: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    pub(crate) fn new(started_at: DateTime<Utc>, fetched: usize) -> Self {
        Self {
            fetched,
            inserted: Vec::new(),
            skipped: Vec::new(),
            invalid: 0,
            started_at,
            finished_at: started_at,
        }
    }

    pub fn inserted_count(&self) -> usize {
        self.inserted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// One-line human summary, used by the CLI and the `/filldb` endpoint.
    pub fn summary(&self) -> String {
        format!(
            "fetched {} countries: {} inserted, {} already present, {} invalid ({} ms)",
            self.fetched,
            self.inserted_count(),
            self.skipped_count(),
            self.invalid,
            self.duration().num_milliseconds()
        )
    }
}
