//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, migrations, state wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::config::{Config, StorageBackend};
use crate::infrastructure::metrics::{InMemoryMetricsRepository, RedisMetricsRepository};
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link and metrics stores (see [`build_state`])
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - A store cannot be reached
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server running on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Constructs the store clients selected by `config.storage` and wires them
/// into the shared [`AppState`].
///
/// With external storage, PostgreSQL is connected (with retry) and migrated
/// before Redis is connected and pinged.
///
/// # Errors
///
/// Returns an error if a store cannot be reached or migrations fail.
pub async fn build_state(config: &Config) -> Result<AppState> {
    match config.storage {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; links and metrics are lost on exit");
            Ok(AppState::new(
                Arc::new(InMemoryLinkRepository::new()),
                Arc::new(InMemoryMetricsRepository::new()),
            ))
        }
        StorageBackend::External => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE=external")?;

            let pool = connect_database(database_url, config).await?;
            info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            info!("Migrations applied");

            let metrics = RedisMetricsRepository::connect(&config.redis_url, &config.metrics_key)
                .await
                .context("Failed to connect to Redis")?;

            Ok(AppState::new(
                Arc::new(PgLinkRepository::new(Arc::new(pool))),
                Arc::new(metrics),
            ))
        }
    }
}

/// Opens the PostgreSQL pool, retrying with exponential backoff.
///
/// Makes at most `config.db_connect_retries` attempts.
pub async fn connect_database(database_url: &str, config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await
            .inspect_err(|e| warn!("Database connection attempt failed: {}", e))
    })
    .await
    .context("Failed to connect to database")
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
