//! marquee server entry point.
//!
//! Starts the Axum HTTP server over the PostgreSQL-backed directory.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use marquee::api;
use marquee::app_state::AppState;
use marquee::config::DirectoryConfig;
use marquee::persistence::postgres::PostgresStore;
use marquee::service::DirectoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = DirectoryConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(addr = %config.listen_addr, "starting marquee");

    // Connect to PostgreSQL
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    // Build service layer
    let store = PostgresStore::new(pool);
    let directory = Arc::new(DirectoryService::new(store));

    // Build application state
    let app_state = AppState { directory };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
