//! Subject type factory (lecture, seminar, lab...).

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SubjectTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SubjectTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::subject_type::Model, DbErr> {
        entity::subject_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject type with default values.
pub async fn create_subject_type(
    db: &DatabaseConnection,
) -> Result<entity::subject_type::Model, DbErr> {
    SubjectTypeFactory::new(db).build().await
}
