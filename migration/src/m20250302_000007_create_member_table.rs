use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000005_create_user_table::User, m20250302_000006_create_group_table::Group,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(integer_uniq(Member::UserId))
                    .col(integer(Member::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_user_id")
                            .from(Member::Table, Member::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_group_id")
                            .from(Member::Table, Member::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_group_id")
                    .table(Member::Table)
                    .col(Member::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    #[sea_orm(iden = "members")]
    Table,
    Id,
    UserId,
    GroupId,
}
