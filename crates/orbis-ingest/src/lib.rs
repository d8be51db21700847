//! Orbis ingestion: fetch the country dataset and sync it into the store.
//!
//! # Modules
//!
//! - [`source`] - Dataset source adapters ([`RestCountriesSource`])
//! - [`sync`] - The [`SyncOrchestrator`] that drives fetch → check → insert
//! - [`config`] - Environment-based configuration shared by the binaries
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CountrySource  │  one GET, full dataset
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │SyncOrchestrator │  per record: exists? → insert / skip
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  CountryStore   │  ClickHouse (or in-memory)
//! └─────────────────┘
//! ```

pub mod config;
pub mod source;
pub mod sync;

pub use config::IngestConfig;
pub use source::{CountrySource, RestCountriesSource, DEFAULT_SOURCE_URL};
pub use sync::{SyncOrchestrator, SyncReport};
