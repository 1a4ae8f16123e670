//! Membership factory.
//!
//! Inserts a member row only; callers keep `groups.people_count` consistent themselves.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a membership row linking `user_id` to `group_id`.
pub async fn create_member(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::member::Model, DbErr> {
    entity::member::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
