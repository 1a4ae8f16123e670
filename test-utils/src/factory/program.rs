//! Program factory for creating test study program entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test programs belonging to a faculty.
pub struct ProgramFactory<'a> {
    db: &'a DatabaseConnection,
    faculty_id: i32,
    name: String,
}

impl<'a> ProgramFactory<'a> {
    /// Creates a new ProgramFactory with default name `"Program {id}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `faculty_id` - Faculty the program belongs to
    pub fn new(db: &'a DatabaseConnection, faculty_id: i32) -> Self {
        Self {
            db,
            faculty_id,
            name: format!("Program {}", next_id()),
        }
    }

    /// Sets the program display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the program entity into the database.
    pub async fn build(self) -> Result<entity::program::Model, DbErr> {
        entity::program::ActiveModel {
            faculty_id: ActiveValue::Set(self.faculty_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a program for the given faculty with default values.
pub async fn create_program(
    db: &DatabaseConnection,
    faculty_id: i32,
) -> Result<entity::program::Model, DbErr> {
    ProgramFactory::new(db, faculty_id).build().await
}
