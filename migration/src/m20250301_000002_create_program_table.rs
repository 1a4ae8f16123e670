use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_faculty_table::Faculty;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(integer(Program::FacultyId))
                    .col(string(Program::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_program_faculty_id")
                            .from(Program::Table, Program::FacultyId)
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Program {
    #[sea_orm(iden = "programs")]
    Table,
    Id,
    FacultyId,
    Name,
}
