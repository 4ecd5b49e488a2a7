use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookings::config::AppConfig;
use bookings::db;
use bookings::handlers;
use bookings::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    tracing::info!(path = %config.database_url, "database ready");

    let addr = format!("0.0.0.0:{}", config.port);

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config,
    });

    let app = Router::new()
        .route(
            "/",
            get(handlers::bookings::page).post(handlers::bookings::submit),
        )
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
