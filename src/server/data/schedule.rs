//! Schedule store.
//!
//! Timetable entries are written once per group in a single bulk insert and removed only
//! together with their group.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::schedule::{NewScheduleEntry, ParityFilter, ScheduleEntry};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts all entries of a group in one statement.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of entries inserted (zero for an empty batch)
    /// - `Err(DbErr)` - Database error, e.g. a foreign key violation
    pub async fn create_many(
        &self,
        group_id: i32,
        entries: Vec<NewScheduleEntry>,
    ) -> Result<usize, DbErr> {
        if entries.is_empty() {
            return Ok(0);
        }

        let count = entries.len();
        let now = Utc::now();
        let models = entries.into_iter().map(|e| entity::schedule::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            building_id: ActiveValue::Set(e.building_id),
            subject_type_id: ActiveValue::Set(e.subject_type_id),
            subject_name: ActiveValue::Set(e.subject_name),
            teacher: ActiveValue::Set(e.teacher),
            room: ActiveValue::Set(e.room),
            is_even: ActiveValue::Set(e.is_even),
            day_of_week: ActiveValue::Set(e.day_of_week),
            start_time: ActiveValue::Set(e.start_time),
            end_time: ActiveValue::Set(e.end_time),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Schedule::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }

    /// Gets the entries of a group joined with building and subject type.
    ///
    /// Ordered by day of week, then start time, then id.
    pub async fn get_by_group(
        &self,
        group_id: i32,
        parity: ParityFilter,
    ) -> Result<Vec<ScheduleEntry>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GroupId.eq(group_id));

        if let Some(is_even) = parity.is_even() {
            query = query.filter(entity::schedule::Column::IsEven.eq(is_even));
        }

        let entries = query
            .order_by_asc(entity::schedule::Column::DayOfWeek)
            .order_by_asc(entity::schedule::Column::StartTime)
            .order_by_asc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let building_ids: Vec<i32> = entries.iter().map(|e| e.building_id).collect();
        let buildings: HashMap<i32, entity::building::Model> = entity::prelude::Building::find()
            .filter(entity::building::Column::Id.is_in(building_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        let type_ids: Vec<i32> = entries.iter().map(|e| e.subject_type_id).collect();
        let subject_types: HashMap<i32, String> = entity::prelude::SubjectType::find()
            .filter(entity::subject_type::Column::Id.is_in(type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(entries
            .into_iter()
            .map(|e| {
                let building = buildings.get(&e.building_id);
                ScheduleEntry {
                    id: e.id,
                    group_id: e.group_id,
                    subject_name: e.subject_name,
                    teacher: e.teacher,
                    room: e.room,
                    is_even: e.is_even,
                    day_of_week: e.day_of_week,
                    start_time: e.start_time,
                    end_time: e.end_time,
                    building_id: e.building_id,
                    building_name: building.map(|b| b.name.clone()).unwrap_or_default(),
                    building_address: building.map(|b| b.address.clone()).unwrap_or_default(),
                    subject_type_id: e.subject_type_id,
                    subject_type_name: subject_types
                        .get(&e.subject_type_id)
                        .cloned()
                        .unwrap_or_default(),
                }
            })
            .collect())
    }

    pub async fn count_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GroupId.eq(group_id))
            .count(self.db)
            .await
    }

    /// Deletes every entry of a group. Used only when the group itself is deleted.
    pub async fn delete_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Schedule::delete_many()
            .filter(entity::schedule::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
