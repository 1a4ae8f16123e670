use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::*,
        catalog::*,
        group::*,
        system::{health, metrics as render_metrics},
        user::*,
    },
    middleware::metrics::track_requests,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Classflow API",
    description = "Student groups, memberships and class timetables"
))]
struct ApiDoc;

/// Registers every API handler and collects the OpenAPI document describing them.
pub fn api_routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(signup))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(update_profile))
        .routes(routes!(get_faculties))
        .routes(routes!(get_faculty_programs))
        .routes(routes!(get_buildings))
        .routes(routes!(get_subject_types))
        .routes(routes!(create_group, get_group_summaries))
        .routes(routes!(get_current_group))
        .routes(routes!(leave_group))
        .routes(routes!(get_group, delete_group))
        .routes(routes!(join_group))
        .routes(routes!(assign_leader))
        .routes(routes!(upload_schedule, get_schedule))
        .split_for_parts()
}

/// Builds the application router with every API route, the OpenAPI document and
/// Swagger UI.
///
/// Request metrics are recorded for matched routes only.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = api_routes();

    api_router
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
