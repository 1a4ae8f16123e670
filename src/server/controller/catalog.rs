use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{BuildingDto, FacultyDto, ProgramDto, SubjectTypeDto},
    },
    server::{error::AppError, service::catalog::CatalogService, state::AppState},
};

pub static CATALOG_TAG: &str = "edu";

/// GET /api/edu/faculties - List all faculties ordered by name
#[utoipa::path(
    get,
    path = "/api/edu/faculties",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All faculties", body = Vec<FacultyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faculties = CatalogService::new(&state.db).get_all_faculties().await?;

    let dto: Vec<FacultyDto> = faculties.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/edu/faculties/{id}/programs - List the programs of a faculty
#[utoipa::path(
    get,
    path = "/api/edu/faculties/{id}/programs",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Programs of the faculty", body = Vec<ProgramDto>),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty_programs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let programs = CatalogService::new(&state.db)
        .get_programs_by_faculty(id)
        .await?;

    let dto: Vec<ProgramDto> = programs.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/edu/buildings - List all buildings
#[utoipa::path(
    get,
    path = "/api/edu/buildings",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All buildings", body = Vec<BuildingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_buildings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let buildings = CatalogService::new(&state.db).get_all_buildings().await?;

    let dto: Vec<BuildingDto> = buildings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/edu/subject-types - List all subject types
#[utoipa::path(
    get,
    path = "/api/edu/subject-types",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All subject types", body = Vec<SubjectTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let subject_types = CatalogService::new(&state.db).get_all_subject_types().await?;

    let dto: Vec<SubjectTypeDto> = subject_types.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
