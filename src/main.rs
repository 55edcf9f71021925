use std::sync::Arc;

use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use smartbook::config::AppConfig;
use smartbook::datastore::memory::MemoryDataStore;
use smartbook::datastore::rest::RestDataStore;
use smartbook::datastore::DataStore;
use smartbook::handlers;
use smartbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let data: Arc<dyn DataStore> = if config.has_supabase() {
        tracing::info!("using Supabase datastore at {}", config.supabase_url);
        Arc::new(RestDataStore::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
        ))
    } else {
        tracing::warn!("SUPABASE_URL/SUPABASE_ANON_KEY not set, data will not persist");
        Arc::new(MemoryDataStore::new())
    };

    let state = Arc::new(AppState::new(config.clone(), data));

    if let Err(e) = state.appointments.reload().await {
        tracing::error!(error = %e, "failed to load appointments");
    }
    if let Err(e) = state.settings.load().await {
        tracing::error!(error = %e, "failed to load business settings");
    }

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/appointments",
            get(handlers::appointments::list).post(handlers::appointments::create),
        )
        .route(
            "/api/appointments/reload",
            post(handlers::appointments::reload),
        )
        .route(
            "/api/appointments/stats",
            get(handlers::appointments::stats),
        )
        .route(
            "/api/appointments/export",
            get(handlers::export::download_csv),
        )
        .route(
            "/api/appointments/:id",
            patch(handlers::appointments::update).delete(handlers::appointments::remove),
        )
        .route("/api/slots", get(handlers::slots::available))
        .route("/api/settings", get(handlers::settings::get_settings))
        .route("/api/settings/hours", put(handlers::settings::update_hours))
        .route(
            "/api/settings/off-days",
            put(handlers::settings::update_off_days),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
