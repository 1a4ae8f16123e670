//! Faculty factory for creating test faculty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test faculties.
///
/// # Example
///
/// ```rust,ignore
/// let faculty = FacultyFactory::new(&db).name("Engineering").build().await?;
/// ```
pub struct FacultyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FacultyFactory<'a> {
    /// Creates a new FacultyFactory with default name `"Faculty {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Faculty {}", next_id()),
        }
    }

    /// Sets the faculty display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the faculty entity into the database.
    pub async fn build(self) -> Result<entity::faculty::Model, DbErr> {
        entity::faculty::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a faculty with default values.
pub async fn create_faculty(db: &DatabaseConnection) -> Result<entity::faculty::Model, DbErr> {
    FacultyFactory::new(db).build().await
}
