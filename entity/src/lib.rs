//! SeaORM entities for the classflow schema.

pub mod prelude;

pub mod building;
pub mod faculty;
pub mod group;
pub mod member;
pub mod program;
pub mod schedule;
pub mod sea_orm_active_enums;
pub mod subject_type;
pub mod user;
