//! Gateway Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use gateway_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use gateway_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use gateway_registry::infrastructure::driven_adapters::{SqliteDeviceRepository, SqliteGatewayRepository};
use gateway_registry::infrastructure::driving_adapters::api_rest::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let fmt_layer = match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gateway_registry=debug,tower_http=debug".into()))
        .with(fmt_layer)
        .init();
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let gateway_repository = Arc::new(SqliteGatewayRepository::new(pool.clone()));
    let device_repository = Arc::new(SqliteDeviceRepository::new(pool.clone()));

    // Build router
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = AppState::new(Arc::new(config), gateway_repository, device_repository);
    let app = router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
