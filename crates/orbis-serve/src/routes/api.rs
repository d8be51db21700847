//! JSON API routes.

use axum::Json;
use axum::extract::{Path, State};
use orbis_core::{Country, CountryStore, PopulationStats};
use orbis_ingest::SyncReport;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/countries`
pub async fn list_countries(State(state): State<AppState>) -> Result<Json<Vec<Country>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

/// `GET /api/v1/countries/{name}`
pub async fn get_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Country>, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("country name is empty".to_string()));
    }

    Ok(Json(state.store.require_by_name(name).await?))
}

/// Population statistics response.
///
/// The statistics fields are omitted when no countries are stored.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub countries: u64,
    #[serde(flatten)]
    pub stats: Option<PopulationStats>,
}

/// `GET /api/v1/stats`
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.store.aggregate_stats().await?;
    let countries = state.store.count().await?;
    Ok(Json(StatsResponse { countries, stats }))
}

/// `POST /api/v1/sync`
pub async fn sync(State(state): State<AppState>) -> Result<Json<SyncReport>, ApiError> {
    Ok(Json(state.sync.sync_from_source().await?))
}
