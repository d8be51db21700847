//! Orbis Serve - HTTP server for the country archive.
//!
//! Initializes the store (exiting if ClickHouse is unreachable), optionally
//! runs one sync, then serves the HTML pages and JSON API.

use anyhow::Context;
use axum::Router;
use axum::http::Request;
use clap::Parser;
use orbis_core::CountryStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use orbis_serve::{AppState, Config, router};

/// Orbis HTTP server for browsing country data.
#[derive(Parser, Debug)]
#[command(name = "orbis-serve")]
#[command(about = "HTTP server for the Orbis country archive", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }
    init_tracing();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    let sync_on_start = config.sync_on_start;

    let state = AppState::new(config);
    state
        .store
        .initialize()
        .await
        .context("failed to initialize country store")?;

    if sync_on_start {
        startup_sync(&state).await;
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, store = state.store.name(), "serving country archive");

    axum::serve(listener, with_middleware(router(state))).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// A failed startup sync is not fatal: the archive serves whatever it holds.
async fn startup_sync(state: &AppState) {
    match state.sync.sync_from_source().await {
        Ok(report) => tracing::info!(summary = %report.summary(), "startup sync finished"),
        Err(e) => tracing::warn!(error = %e, "startup sync failed, serving existing data"),
    }
}

/// Request tracing with an `http_request` span per request, plus open CORS
/// for the JSON API.
fn with_middleware(app: Router) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::span!(
            Level::INFO,
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });
    app.layer(trace).layer(CorsLayer::permissive())
}
