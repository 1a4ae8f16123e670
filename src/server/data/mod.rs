//! Data access layer for database operations.
//!
//! Repositories wrap SeaORM queries and convert entity models into domain models at the
//! boundary. Every repository is generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the connection pool or inside a `DatabaseTransaction`; services that
//! mutate several tables open one transaction and hand it to every repository they use.
//!
//! Repositories return `Ok(None)` for missing rows and leave the decision of what a
//! missing row means to the service layer.

pub mod catalog;
pub mod group;
pub mod member;
pub mod schedule;
pub mod user;
