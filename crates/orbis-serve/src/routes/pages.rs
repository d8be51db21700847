//! Browser-facing HTML routes.

use axum::extract::{Query, State};
use maud::Markup;
use orbis_core::CountryStore;
use serde::Deserialize;

use crate::error::PageError;
use crate::render;
use crate::state::AppState;

/// `GET /`
pub async fn home() -> Markup {
    render::home_page()
}

/// Query parameters for the country lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryQuery {
    #[serde(default)]
    pub country: String,
}

/// `GET /country?country={name}`
///
/// Case-insensitive lookup. Unknown names render a 404 page.
pub async fn country(
    State(state): State<AppState>,
    Query(params): Query<CountryQuery>,
) -> Result<Markup, PageError> {
    let name = params.country.trim();
    if name.is_empty() {
        return Err(PageError::BadRequest(
            "Enter a country name to search for.".to_string(),
        ));
    }

    let country = state.store.require_by_name(name).await.inspect_err(|e| {
        if matches!(e, orbis_core::Error::NotFound(_)) {
            tracing::info!(query = %name, "country not found");
        }
    })?;
    tracing::debug!(country = %country.name, "rendering country page");
    Ok(render::country_page(&country))
}

/// `GET /countries`
pub async fn countries(State(state): State<AppState>) -> Result<Markup, PageError> {
    let countries = state.store.list_all().await?;
    let stats = state.store.aggregate_stats().await?;
    Ok(render::countries_page(&countries, stats.as_ref()))
}

/// `POST /filldb`
///
/// Runs a full sync and answers with a plain-text summary.
pub async fn fill_db(State(state): State<AppState>) -> Result<String, PageError> {
    let report = state.sync.sync_from_source().await?;
    Ok(report.summary())
}
