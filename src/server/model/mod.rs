//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary, services
//! operate on them, and controllers convert them into DTOs for responses.

pub mod catalog;
pub mod group;
pub mod schedule;
pub mod user;
