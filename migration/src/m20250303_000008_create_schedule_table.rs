use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_building_table::Building,
    m20250301_000004_create_subject_type_table::SubjectType,
    m20250302_000006_create_group_table::Group,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::GroupId))
                    .col(integer(Schedule::BuildingId))
                    .col(integer(Schedule::SubjectTypeId))
                    .col(string(Schedule::SubjectName))
                    .col(string(Schedule::Teacher))
                    .col(string(Schedule::Room))
                    .col(boolean(Schedule::IsEven))
                    .col(integer(Schedule::DayOfWeek))
                    .col(string(Schedule::StartTime))
                    .col(string(Schedule::EndTime))
                    .col(
                        timestamp(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_group_id")
                            .from(Schedule::Table, Schedule::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_building_id")
                            .from(Schedule::Table, Schedule::BuildingId)
                            .to(Building::Table, Building::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_subject_type_id")
                            .from(Schedule::Table, Schedule::SubjectTypeId)
                            .to(SubjectType::Table, SubjectType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_group_id")
                    .table(Schedule::Table)
                    .col(Schedule::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    GroupId,
    BuildingId,
    SubjectTypeId,
    SubjectName,
    Teacher,
    Room,
    IsEven,
    DayOfWeek,
    StartTime,
    EndTime,
    CreatedAt,
}
