//! HTTP routes exposing the GraphQL transport.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use thiserror::Error;

use crate::graphql::{GraphQlRequest, GraphQlResponse, TASK_SCHEMA_SDL, TaskResolver};
use crate::task::{ports::TaskRepository, services::TaskService};

/// Resolver type shared by request handlers.
pub type SharedResolver = TaskResolver<dyn TaskRepository>;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    resolver: SharedResolver,
}

impl AppState {
    /// Builds handler state over any task repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            resolver: TaskResolver::new(TaskService::new(repository)),
        }
    }
}

/// Errors raised while starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Liveness payload.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", post(execute_graphql))
        .route("/graphql/schema", get(schema))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Binds `addr` and serves the router on a background task.
///
/// The server stops gracefully on Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the listener cannot bind.
pub async fn start_server_with_state(
    addr: &str,
    state: AppState,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), ServerError> {
    let bind_error = |source| ServerError::Bind {
        addr: addr.to_owned(),
        source,
    };
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(bind_error)?;
    let bound_addr = listener.local_addr().map_err(bind_error)?;
    let app = router(state);

    let handle = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            tracing::error!(error = %err, "http server error");
        }
    });

    Ok((bound_addr, handle))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

async fn execute_graphql(
    State(state): State<AppState>,
    payload: Result<Json<GraphQlRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => Json(state.resolver.execute(request).await).into_response(),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!(error = %message, "unparseable graphql request body");
            (
                StatusCode::BAD_REQUEST,
                Json(GraphQlResponse::malformed_body(message)),
            )
                .into_response()
        }
    }
}

async fn schema() -> &'static str {
    TASK_SCHEMA_SDL
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
