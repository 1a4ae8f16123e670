//! Schedule entry factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedule entries of a group.
///
/// Defaults to an odd-week Monday class from `"09:00"` to `"10:30"`.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::schedule::ActiveModel,
}

impl<'a> ScheduleFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: i32,
        building_id: i32,
        subject_type_id: i32,
    ) -> Self {
        let id = next_id();
        let entity = entity::schedule::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            building_id: ActiveValue::Set(building_id),
            subject_type_id: ActiveValue::Set(subject_type_id),
            subject_name: ActiveValue::Set(format!("Subject {}", id)),
            teacher: ActiveValue::Set(format!("Teacher {}", id)),
            room: ActiveValue::Set(format!("{}", 100 + id)),
            is_even: ActiveValue::Set(false),
            day_of_week: ActiveValue::Set(1),
            start_time: ActiveValue::Set("09:00".to_string()),
            end_time: ActiveValue::Set("10:30".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        Self { db, entity }
    }

    pub fn is_even(mut self, is_even: bool) -> Self {
        self.entity.is_even = ActiveValue::Set(is_even);
        self
    }

    pub fn day_of_week(mut self, day_of_week: i32) -> Self {
        self.entity.day_of_week = ActiveValue::Set(day_of_week);
        self
    }

    pub fn times(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.entity.start_time = ActiveValue::Set(start_time.into());
        self.entity.end_time = ActiveValue::Set(end_time.into());
        self
    }

    pub fn subject_name(mut self, subject_name: impl Into<String>) -> Self {
        self.entity.subject_name = ActiveValue::Set(subject_name.into());
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        self.entity.insert(self.db).await
    }
}

/// Creates a schedule entry with default values.
pub async fn create_schedule(
    db: &DatabaseConnection,
    group_id: i32,
    building_id: i32,
    subject_type_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, group_id, building_id, subject_type_id)
        .build()
        .await
}
