//! Route definitions.

mod api;
mod health;
mod pages;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete router.
///
/// # Route Structure
///
/// ## Pages
/// - `GET /` - Home page with search form
/// - `GET /country?country={name}` - Single country page
/// - `GET /countries` - Listing with population stats
/// - `POST /filldb` - Sync from the dataset source (plain-text summary)
/// - `GET /static/*` - Files from the configured static directory
/// - `GET /health` - Health check
///
/// ## JSON API
/// - `GET /api/v1/countries` - All countries ordered by name
/// - `GET /api/v1/countries/{name}` - Single country
/// - `GET /api/v1/stats` - Population statistics
/// - `POST /api/v1/sync` - Sync and return the full report
pub fn router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/countries", get(api::list_countries))
        .route("/countries/{name}", get(api::get_country))
        .route("/stats", get(api::stats))
        .route("/sync", post(api::sync));

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/country", get(pages::country))
        .route("/countries", get(pages::countries))
        .route("/filldb", post(pages::fill_db))
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1)
        .nest_service("/static", static_files)
        .with_state(state)
}
