//! Core types and the store gateway for the Orbis country archive.
//!
//! This crate provides:
//! - The country record model and its translation from the dataset's wire shape
//! - The [`CountryStore`] trait with ClickHouse and in-memory implementations
//! - Shared error types

mod error;
mod model;
pub mod store;

/// Default table holding the country records.
pub const DEFAULT_TABLE: &str = "countries";

pub use error::{Error, Result};
pub use model::{Country, PopulationStats, SourceCountry, SourceFlags, SourceName, normalize_name};
pub use store::{ClickHouseStore, ClickHouseStoreConfig, CountryStore, MemoryStore};
