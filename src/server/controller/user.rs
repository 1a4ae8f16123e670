use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// PATCH /api/users/me - Update the caller's profile
///
/// Only the full name can be changed; a blank name clears it.
///
/// # Access Control
/// Any logged-in user, on their own profile
///
/// # Returns
/// - `200 OK`: the updated user
/// - `401 Unauthorized`: not logged in
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = UserService::new(&state.db)
        .update_profile(user.id, payload.full_name)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}
