use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        group::{AssignLeaderDto, CreateGroupDto, GroupDto, GroupSummaryDto, JoinGroupDto},
        schedule::{ScheduleEntryDto, ScheduleUploadedDto, UploadScheduleDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            metrics::GroupEvent,
        },
        model::{
            group::{CreateGroupParams, GroupSummaryFilter},
            schedule::{NewScheduleEntry, ParityFilter},
        },
        service::group::GroupService,
        state::AppState,
    },
};

pub static GROUP_TAG: &str = "group";

/// Query parameters of the group listing.
#[derive(Deserialize, IntoParams)]
pub struct GroupSummaryParams {
    /// Exact faculty name to filter by.
    pub faculty: Option<String>,
    /// Exact program name to filter by.
    pub program: Option<String>,
}

/// Query parameters of the schedule endpoint.
#[derive(Deserialize, IntoParams)]
pub struct ScheduleParams {
    /// `true`/`even` or `false`/`odd`; anything else returns both weeks.
    pub week_even: Option<String>,
}

/// POST /api/groups - Create a group
///
/// A student creating a group becomes its leader. An administrator may name a
/// leader through `leader_id` or leave the group unowned.
///
/// # Access Control
/// Administrators and students; leaders already own a group
///
/// # Returns
/// - `201 Created`: the new group including its join code
/// - `400 Bad Request`: program does not belong to the faculty
/// - `404 Not Found`: unknown faculty, program or leader
/// - `409 Conflict`: short name taken or caller already in a group
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Faculty, program or user not found", body = ErrorDto),
        (status = 409, description = "Group exists or caller already in a group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    let service = GroupService::new(&state.db);
    let group = service
        .create(principal, CreateGroupParams::from_dto(payload))
        .await?;
    state.metrics.record_group_event(GroupEvent::Created);

    let details = service.get_by_id(group.id).await?;
    let include_code = details.code_visible_to(&principal);

    Ok((StatusCode::CREATED, Json(details.into_dto(include_code))))
}

/// GET /api/groups - List groups with optional faculty and program filters
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(GroupSummaryParams),
    responses(
        (status = 200, description = "Matching groups", body = Vec<GroupSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_summaries(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<GroupSummaryParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = GroupSummaryFilter {
        faculty: params.faculty,
        program: params.program,
    };
    let summaries = GroupService::new(&state.db).get_summaries(filter).await?;

    let dto: Vec<GroupSummaryDto> = summaries.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/groups/me - Get the caller's group
#[utoipa::path(
    get,
    path = "/api/groups/me",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "The caller's group", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not in a group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_group(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    let details = GroupService::new(&state.db)
        .get_current_group(principal)
        .await?;
    let include_code = details.code_visible_to(&principal);

    Ok((StatusCode::OK, Json(details.into_dto(include_code))))
}

/// GET /api/groups/{id} - Get a group
///
/// The join code is only included for the group's leader and administrators.
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "The group", body = GroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    let details = GroupService::new(&state.db).get_by_id(id).await?;
    let include_code = details.code_visible_to(&principal);

    Ok((StatusCode::OK, Json(details.into_dto(include_code))))
}

/// DELETE /api/groups/{id} - Delete a group with its memberships and schedule
///
/// # Access Control
/// Administrators only
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .principal(&[Permission::Admin])
        .await?;

    GroupService::new(&state.db).delete(principal, id).await?;
    state.metrics.record_group_event(GroupEvent::Deleted);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/groups/{id}/join - Join a group with its code
///
/// # Returns
/// - `204 No Content`: joined
/// - `403 Forbidden`: wrong code
/// - `404 Not Found`: group not found
/// - `409 Conflict`: caller already in a group
#[utoipa::path(
    post,
    path = "/api/groups/{id}/join",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = JoinGroupDto,
    responses(
        (status = 204, description = "Joined the group"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Wrong join code", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Caller already in a group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<JoinGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    GroupService::new(&state.db)
        .join(principal, id, &payload.code)
        .await?;
    state.metrics.record_group_event(GroupEvent::Joined);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/groups/leave - Leave the caller's group
///
/// A leader leaving gives up the group and reverts to student.
#[utoipa::path(
    post,
    path = "/api/groups/leave",
    tag = GROUP_TAG,
    responses(
        (status = 204, description = "Left the group"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not in a group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_group(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    GroupService::new(&state.db).leave(principal).await?;
    state.metrics.record_group_event(GroupEvent::Left);

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/groups/{id}/leader - Make a member the group's leader
///
/// # Access Control
/// Administrators only
#[utoipa::path(
    put,
    path = "/api/groups/{id}/leader",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = AssignLeaderDto,
    responses(
        (status = 204, description = "Leader assigned"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group, user or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_leader(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignLeaderDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .principal(&[Permission::Admin])
        .await?;

    GroupService::new(&state.db)
        .assign_leader(principal, id, payload.user_id)
        .await?;
    state.metrics.record_group_event(GroupEvent::LeaderAssigned);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/groups/{id}/schedule - Upload the group's timetable
///
/// The payload is validated before any lookup: 1 or 2 weeks of differing parity,
/// 1 to 7 days per week and day numbers between 1 and 7. A group accepts a single upload.
///
/// # Access Control
/// The group's leader or an administrator
#[utoipa::path(
    post,
    path = "/api/groups/{id}/schedule",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = UploadScheduleDto,
    responses(
        (status = 201, description = "Schedule stored", body = ScheduleUploadedDto),
        (status = 400, description = "Malformed schedule", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not lead the group", body = ErrorDto),
        (status = 404, description = "Group, building or subject type not found", body = ErrorDto),
        (status = 409, description = "Schedule already uploaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UploadScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).principal(&[]).await?;

    let entries = NewScheduleEntry::from_upload_dto(payload)?;
    let stored = GroupService::new(&state.db)
        .upload_schedule(principal, id, entries)
        .await?;
    state.metrics.record_group_event(GroupEvent::ScheduleUploaded);

    Ok((
        StatusCode::CREATED,
        Json(ScheduleUploadedDto { entries: stored }),
    ))
}

/// GET /api/groups/{id}/schedule - Get the group's timetable
#[utoipa::path(
    get,
    path = "/api/groups/{id}/schedule",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID"),
        ScheduleParams
    ),
    responses(
        (status = 200, description = "Schedule entries ordered by day and start time", body = Vec<ScheduleEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<ScheduleParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let parity = ParityFilter::parse(params.week_even.as_deref());
    let entries = GroupService::new(&state.db)
        .get_schedule(id, parity)
        .await?;

    let dto: Vec<ScheduleEntryDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
