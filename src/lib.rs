//! Taskboard: per-user task management behind a GraphQL API.
//!
//! The crate validates and authorizes task creation and updates, answers
//! per-user task queries, and exposes those operations over HTTP.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters and services
//! - [`graphql`]: Persisted-operation GraphQL transport
//! - [`server`]: HTTP routing, configuration and startup

pub mod graphql;
pub mod server;
pub mod task;
