use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use sea_orm::ConnectionTrait;

use crate::server::{error::AppError, state::AppState};

/// GET /health - Liveness check that also pings the database.
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state
        .db
        .execute_unprepared("SELECT 1")
        .await
        .map_err(|e| AppError::InternalError(format!("Database health check failed: {}", e)))?;

    Ok((StatusCode::OK, "ok"))
}

/// GET /metrics - Prometheus text exposition of the collected metrics.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
