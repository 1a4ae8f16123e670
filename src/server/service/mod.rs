//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules and translate store results
//! into domain errors. They work with domain models and never see DTOs.

pub mod auth;
pub mod catalog;
pub mod group;
pub mod user;
