use crate::server::{
    error::{auth::AuthError, group::GroupError, AppError},
    model::{
        group::{CreateGroupParams, GroupSummaryFilter},
        schedule::{NewScheduleEntry, ParityFilter},
        user::{Principal, Role},
    },
    service::group::GroupService,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod assign_leader;
mod create;
mod get_current_group;
mod join;
mod upload_schedule;

fn principal(user: &entity::user::Model) -> Principal {
    Principal::new(user.id, Role::from_entity(user.role.clone()))
}

async fn role_of(db: &DatabaseConnection, user_id: i32) -> Result<UserRole, DbErr> {
    let user = entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("user {}", user_id)))?;

    Ok(user.role)
}

async fn load_group(db: &DatabaseConnection, group_id: i32) -> Result<Option<entity::group::Model>, DbErr> {
    entity::prelude::Group::find_by_id(group_id).one(db).await
}

async fn member_count(db: &DatabaseConnection, group_id: i32) -> Result<u64, DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter};

    entity::prelude::Member::find()
        .filter(entity::member::Column::GroupId.eq(group_id))
        .count(db)
        .await
}

fn schedule_entry(building_id: i32, subject_type_id: i32, day: i32, is_even: bool) -> NewScheduleEntry {
    NewScheduleEntry {
        building_id,
        subject_type_id,
        subject_name: format!("Subject {}", day),
        teacher: "Dr. Smith".to_string(),
        room: "204".to_string(),
        is_even,
        day_of_week: day,
        start_time: "09:00".to_string(),
        end_time: "10:30".to_string(),
    }
}
