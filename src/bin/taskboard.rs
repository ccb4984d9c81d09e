//! Runs the taskboard GraphQL server.
//!
//! Usage:
//!
//! ```text
//! taskboard [--bind <addr>] [--config <path>] [--database-url <url>]
//!           [--pool-size <n>] [--log-level <filter>]
//! ```
//!
//! Without a database URL the server keeps tasks in memory. With one, it
//! opens an r2d2 pool, applies the task schema and serves from `PostgreSQL`.

use std::sync::Arc;

use clap::Parser;
use taskboard::server::{
    AppState, ConfigError, DEFAULT_LOG_LEVEL, ServerError, TaskboardCliArgs, TaskboardConfig,
    start_server_with_state,
};
use taskboard::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, connect_pool, run_migrations},
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that stop the server before or while it runs.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build database pool: {0}")]
    Pool(#[source] TaskRepositoryError),
    #[error("failed to apply task schema: {0}")]
    Migration(#[source] TaskRepositoryError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = TaskboardCliArgs::parse();
    let config = TaskboardConfig::load(&cli).map_err(StartupError::from)?;

    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run(config).await.map_err(|err| {
        tracing::error!(error = %err, "taskboard server stopped");
        err.into()
    })
}

async fn run(config: TaskboardConfig) -> Result<(), StartupError> {
    let repository = open_repository(&config).await?;
    let (bound_addr, handle) =
        start_server_with_state(&config.bind_addr, AppState::new(repository)).await?;
    tracing::info!(addr = %bound_addr, "taskboard server listening");
    handle.await?;
    Ok(())
}

async fn open_repository(
    config: &TaskboardConfig,
) -> Result<Arc<dyn TaskRepository>, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::info!("no database configured; using in-memory task store");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let pool = connect_pool(database_url, config.pool_size)
        .await
        .map_err(StartupError::Pool)?;
    run_migrations(&pool)
        .await
        .map_err(StartupError::Migration)?;
    tracing::info!(pool_size = config.pool_size, "using PostgreSQL task store");
    Ok(Arc::new(PostgresTaskRepository::new(pool)))
}
