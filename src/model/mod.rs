//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON request and response bodies. Server-side domain models
//! convert into and from them at the controller boundary.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod group;
pub mod schedule;
pub mod user;
