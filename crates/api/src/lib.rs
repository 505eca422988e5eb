//! Notify API server library.
//!
//! Exposes the building blocks (config, state, error handling, service,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod schemas;
pub mod services;
pub mod state;
