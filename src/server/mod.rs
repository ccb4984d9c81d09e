//! HTTP hosting for the GraphQL transport.

pub mod config;
mod router;

pub use config::{ConfigError, DEFAULT_LOG_LEVEL, TaskboardCliArgs, TaskboardConfig};
pub use router::{AppState, ServerError, SharedResolver, router, start_server_with_state};
