//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs to domain
//! parameters, call a service and convert the result back to a DTO. Every handler is
//! annotated with `#[utoipa::path]` and collected into the OpenAPI document by the router.

pub mod auth;
pub mod catalog;
pub mod group;
pub mod system;
pub mod user;
