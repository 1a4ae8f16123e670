//! Group factory for creating test group entities.
//!
//! Factories write rows directly and do not maintain the membership counter; set
//! `people_count` explicitly when a test also inserts member rows.

use crate::factory::helpers::{next_code, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db, faculty.id, program.id)
///     .short_name("CS101")
///     .exists_schedule(true)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::group::ActiveModel,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - short_name: `"G{id}"`
    /// - code: unique base-62 code from `next_code()`
    /// - leader_id: `None`
    /// - people_count: `0`
    /// - exists_schedule: `false`
    pub fn new(db: &'a DatabaseConnection, faculty_id: i32, program_id: i32) -> Self {
        let entity = entity::group::ActiveModel {
            leader_id: ActiveValue::Set(None),
            faculty_id: ActiveValue::Set(faculty_id),
            program_id: ActiveValue::Set(program_id),
            short_name: ActiveValue::Set(format!("G{}", next_id())),
            code: ActiveValue::Set(next_code()),
            people_count: ActiveValue::Set(0),
            exists_schedule: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        Self { db, entity }
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.entity.short_name = ActiveValue::Set(short_name.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = ActiveValue::Set(code.into());
        self
    }

    pub fn leader(mut self, leader_id: Option<i32>) -> Self {
        self.entity.leader_id = ActiveValue::Set(leader_id);
        self
    }

    pub fn people_count(mut self, people_count: i32) -> Self {
        self.entity.people_count = ActiveValue::Set(people_count);
        self
    }

    pub fn exists_schedule(mut self, exists_schedule: bool) -> Self {
        self.entity.exists_schedule = ActiveValue::Set(exists_schedule);
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        self.entity.insert(self.db).await
    }
}

/// Creates an unowned, empty group with default values.
pub async fn create_group(
    db: &DatabaseConnection,
    faculty_id: i32,
    program_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, faculty_id, program_id).build().await
}
