//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` is a pool
//! handle and `Metrics` holds reference-counted parts.

use sea_orm::DatabaseConnection;

use crate::server::middleware::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Prometheus registry rendered at `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: DatabaseConnection, metrics: Metrics) -> Self {
        Self { db, metrics }
    }
}
