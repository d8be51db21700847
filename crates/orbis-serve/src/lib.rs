//! Orbis Serve - HTML pages and a JSON API over the country archive.
//!
//! The server holds no business logic of its own: every handler calls one
//! [`orbis_core::CountryStore`] operation or
//! [`orbis_ingest::SyncOrchestrator::sync_from_source`] and renders the result.
//!
//! # Architecture
//!
//! - **AppState**: Shared store handle, sync orchestrator, and configuration
//! - **Routes**: HTML pages, JSON API, sync trigger, static files
//! - **Render**: maud templates and number formatting

pub mod config;
mod error;
pub mod render;
mod routes;
mod state;

pub use self::config::Config;
pub use self::error::{ApiError, PageError};
pub use self::routes::router;
pub use self::state::AppState;
