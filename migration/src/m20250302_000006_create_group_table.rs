use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_faculty_table::Faculty,
    m20250301_000002_create_program_table::Program, m20250301_000005_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(pk_auto(Group::Id))
                    .col(integer_null(Group::LeaderId))
                    .col(integer(Group::FacultyId))
                    .col(integer(Group::ProgramId))
                    .col(string_uniq(Group::ShortName))
                    .col(string_len_uniq(Group::Code, 4))
                    .col(integer(Group::PeopleCount).default(0))
                    .col(boolean(Group::ExistsSchedule).default(false))
                    .col(
                        timestamp(Group::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_leader_id")
                            .from(Group::Table, Group::LeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_faculty_id")
                            .from(Group::Table, Group::FacultyId)
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_program_id")
                            .from(Group::Table, Group::ProgramId)
                            .to(Program::Table, Program::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    #[sea_orm(iden = "groups")]
    Table,
    Id,
    LeaderId,
    FacultyId,
    ProgramId,
    ShortName,
    Code,
    PeopleCount,
    ExistsSchedule,
    CreatedAt,
}
