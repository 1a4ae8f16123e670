//! Membership store.
//!
//! Maps users to groups. A unique index on `members.user_id` guarantees at most one
//! membership per user; callers translate the resulting unique violation into a domain
//! error.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::group::Membership;

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership row.
    ///
    /// Does not touch `groups.people_count`; the group engine updates the counter in the
    /// same transaction.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(DbErr)` - Database error; a unique violation means the user already has one
    pub async fn create(&self, user_id: i32, group_id: i32) -> Result<Membership, DbErr> {
        let entity = entity::member::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Finds the membership of a user.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Returns the id of the group the user belongs to, if any.
    pub async fn find_group_id_by_user(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Member::find()
            .select_only()
            .column(entity::member::Column::GroupId)
            .filter(entity::member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Deletes the membership of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A membership was removed
    /// - `Ok(false)` - The user had no membership
    pub async fn delete_by_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_many()
            .filter(entity::member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the live membership rows of a group.
    pub async fn count_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::GroupId.eq(group_id))
            .count(self.db)
            .await
    }

    /// Deletes every membership of a group, returning how many were removed.
    pub async fn delete_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::delete_many()
            .filter(entity::member::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
