//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod group;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError,
        config::ConfigError,
        group::{ErrorKind, GroupError},
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping; group engine errors
/// only carry a kind, which is turned into a status here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, 409 Conflict).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Group lifecycle rule violation.
    ///
    /// The status is chosen from the error kind by [`group_error_status`].
    #[error(transparent)]
    GroupErr(#[from] GroupError),

    /// Database operation error from SeaORM without additional context.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Database failure raised while performing a named engine operation.
    ///
    /// Produced through [`StoreContext::context`]. Results in 500 Internal Server Error.
    #[error("Store operation '{operation}' failed: {source}")]
    Store {
        /// Name of the operation that was running when the store failed.
        operation: &'static str,
        /// The underlying database error.
        #[source]
        source: DbErr,
    },

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket or listener error while serving HTTP.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Attaches the name of the running operation to a database error.
///
/// # Example
///
/// ```rust,ignore
/// let group = repo.find_by_id(id).await.context("join_group")?;
/// ```
pub trait StoreContext<T> {
    /// Converts a `DbErr` into `AppError::Store` tagged with `operation`.
    fn context(self, operation: &'static str) -> Result<T, AppError>;
}

impl<T> StoreContext<T> for Result<T, DbErr> {
    fn context(self, operation: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Store { operation, source })
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, group errors are mapped
/// from their kind, and other errors use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, Store, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to its own implementation
/// - Variable - For `GroupErr`, chosen from the error kind by [`group_error_status`]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::GroupErr(err) => {
                tracing::debug!("{}", err);

                (
                    group_error_status(&err),
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// HTTP status for a group engine error.
///
/// The kind decides the status. Mismatches caused by the caller's identity (wrong code,
/// not the owner) are 403; inconsistent request data is 400.
pub fn group_error_status(err: &GroupError) -> StatusCode {
    match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::Mismatch => match err {
            GroupError::WrongCode(_) | GroupError::NotOwner { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        },
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
