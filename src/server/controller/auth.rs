use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, SignUpDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/signup - Register a student account and log it in
///
/// # Access Control
/// Public
///
/// # Returns
/// - `201 Created`: the new user
/// - `400 Bad Request`: malformed e-mail or password too short
/// - `409 Conflict`: e-mail already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Invalid e-mail or password", body = ErrorDto),
        (status = 409, description = "E-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .sign_up(&payload.email, &payload.password, payload.full_name)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Log in with e-mail and password
///
/// # Access Control
/// Public
///
/// # Returns
/// - `200 OK`: the logged-in user
/// - `401 Unauthorized`: unknown e-mail or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid e-mail or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - End the current session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - Get the logged-in user
///
/// # Access Control
/// Any logged-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
