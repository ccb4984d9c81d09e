//! Task management for taskboard.
//!
//! This module implements the task mutation path (creating tasks and
//! applying authorized partial updates) together with owner-scoped lookup,
//! listing and deletion. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
