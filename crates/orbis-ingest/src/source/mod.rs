//! Dataset source adapters.
//!
//! All sources implement [`CountrySource`], which returns the complete
//! dataset in one call. Sources never retry and never return a partial
//! result: either every record decodes or the call fails with
//! [`orbis_core::Error::Fetch`].

mod rest;

pub use rest::{DEFAULT_SOURCE_URL, RestCountriesSource};

use async_trait::async_trait;
use orbis_core::{Result, SourceCountry};

/// A source of country records.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Human-readable name for this source (used in logs).
    fn name(&self) -> &'static str;

    /// Fetch the full dataset, in the order the source returns it.
    async fn fetch_all(&self) -> Result<Vec<SourceCountry>>;
}
