//! Error types shared by every Orbis component.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the data layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The store could not be reached at startup.
    #[error("connection error: {0}")]
    Connection(String),

    /// The dataset source failed (network, status, or payload decoding).
    #[error("fetch error: {0}")]
    Fetch(String),

    /// A ClickHouse read or write failed.
    #[error("query error: {0}")]
    Query(#[from] clickhouse::error::Error),

    /// A store operation failed outside of ClickHouse.
    #[error("store error: {0}")]
    Store(String),

    /// A required record does not exist (see `CountryStore::require_by_name`).
    #[error("not found: {0}")]
    NotFound(String),
}
