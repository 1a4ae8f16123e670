use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request was made without logging in first. Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale session should be discarded.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required by the endpoint.
    ///
    /// The message is logged for diagnostics; the client receives a generic 403 response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// No account is registered for the given e-mail address.
    #[error("No user registered with email '{0}'")]
    UnknownEmail(String),

    /// The password does not match the stored hash.
    #[error("Wrong password")]
    WrongPassword,

    /// Sign-up with an e-mail address that is already registered.
    #[error("User with email '{0}' already exists")]
    UserAlreadyExists(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `UnknownEmail` / `WrongPassword` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden
/// - `UserAlreadyExists` → 409 Conflict
///
/// Credential failures share a single message so the response does not reveal which
/// e-mail addresses are registered.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::UnknownEmail(_) | Self::WrongPassword => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "Insufficient permissions".to_string(),
            ),
            Self::UserAlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
