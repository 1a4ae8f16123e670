//! Group repository.
//!
//! Counter and flag updates are expressed as single conditional `UPDATE` statements so
//! concurrent transactions never lose an increment and a one-time transition can only
//! succeed once.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::group::{
    Group, GroupDetails, GroupSummary, GroupSummaryFilter, NewGroup,
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run statements on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a group row.
    ///
    /// The group starts with `people_count = 0` and `exists_schedule = false`.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error; unique violations on `short_name` or `code` included
    pub async fn create(&self, new_group: NewGroup) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            leader_id: ActiveValue::Set(new_group.leader_id),
            faculty_id: ActiveValue::Set(new_group.faculty_id),
            program_id: ActiveValue::Set(new_group.program_id),
            short_name: ActiveValue::Set(new_group.short_name),
            code: ActiveValue::Set(new_group.code),
            people_count: ActiveValue::Set(0),
            exists_schedule: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::ShortName.eq(short_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Checks whether any group already uses the join code.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find()
            .filter(entity::group::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds one to `people_count`.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter updated
    /// - `Ok(false)` - No group with that id
    pub async fn increment_people_count(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::update_many()
            .col_expr(
                entity::group::Column::PeopleCount,
                Expr::col(entity::group::Column::PeopleCount).add(1),
            )
            .filter(entity::group::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Subtracts one from `people_count`, never going below zero.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter updated
    /// - `Ok(false)` - No group with that id or the counter is already zero
    pub async fn decrement_people_count(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::update_many()
            .col_expr(
                entity::group::Column::PeopleCount,
                Expr::col(entity::group::Column::PeopleCount).sub(1),
            )
            .filter(entity::group::Column::Id.eq(id))
            .filter(entity::group::Column::PeopleCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the leader reference of a group. `None` leaves the group unowned.
    pub async fn set_leader(&self, id: i32, leader_id: Option<i32>) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::update_many()
            .col_expr(entity::group::Column::LeaderId, Expr::value(leader_id))
            .filter(entity::group::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Flips `exists_schedule` from `false` to `true`.
    ///
    /// The update only matches rows whose flag is still `false`, so of two racing uploads
    /// exactly one observes `Ok(true)`.
    ///
    /// # Returns
    /// - `Ok(true)` - The flag was flipped by this call
    /// - `Ok(false)` - The flag was already set or the group does not exist
    pub async fn mark_schedule_uploaded(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::update_many()
            .col_expr(entity::group::Column::ExistsSchedule, Expr::value(true))
            .filter(entity::group::Column::Id.eq(id))
            .filter(entity::group::Column::ExistsSchedule.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a group row.
    ///
    /// Foreign keys cascade to members and schedules.
    ///
    /// # Returns
    /// - `Ok(true)` - Group deleted
    /// - `Ok(false)` - No group with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a group with its faculty and program names.
    pub async fn get_details(&self, id: i32) -> Result<Option<GroupDetails>, DbErr> {
        let Some((group, faculty)) = entity::prelude::Group::find_by_id(id)
            .find_also_related(entity::prelude::Faculty)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let program = entity::prelude::Program::find_by_id(group.program_id)
            .one(self.db)
            .await?;

        Ok(Some(GroupDetails {
            group: Group::from_entity(group),
            faculty_name: faculty.map(|f| f.name).unwrap_or_default(),
            program_name: program.map(|p| p.name).unwrap_or_default(),
        }))
    }

    /// Lists groups, optionally filtered by exact faculty and program names.
    ///
    /// Ordered by short name. The member count is read from the stored counter.
    pub async fn get_summaries(
        &self,
        filter: GroupSummaryFilter,
    ) -> Result<Vec<GroupSummary>, DbErr> {
        let mut query = entity::prelude::Group::find()
            .join(JoinType::InnerJoin, entity::group::Relation::Faculty.def())
            .join(JoinType::InnerJoin, entity::group::Relation::Program.def());

        if let Some(faculty) = filter.faculty {
            query = query.filter(entity::faculty::Column::Name.eq(faculty));
        }
        if let Some(program) = filter.program {
            query = query.filter(entity::program::Column::Name.eq(program));
        }

        let groups = query
            .order_by_asc(entity::group::Column::ShortName)
            .all(self.db)
            .await?;

        if groups.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch faculty and program names in one query each
        let faculty_ids: Vec<i32> = groups.iter().map(|g| g.faculty_id).collect();
        let faculties: HashMap<i32, String> = entity::prelude::Faculty::find()
            .filter(entity::faculty::Column::Id.is_in(faculty_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| (f.id, f.name))
            .collect();

        let program_ids: Vec<i32> = groups.iter().map(|g| g.program_id).collect();
        let programs: HashMap<i32, String> = entity::prelude::Program::find()
            .filter(entity::program::Column::Id.is_in(program_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        Ok(groups
            .into_iter()
            .map(|g| GroupSummary {
                id: g.id,
                faculty_name: faculties.get(&g.faculty_id).cloned().unwrap_or_default(),
                program_name: programs.get(&g.program_id).cloned().unwrap_or_default(),
                short_name: g.short_name,
                people_count: g.people_count,
                exists_schedule: g.exists_schedule,
            })
            .collect())
    }
}
