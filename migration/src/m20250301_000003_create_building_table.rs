use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Building::Table)
                    .if_not_exists()
                    .col(pk_auto(Building::Id))
                    .col(string(Building::Name))
                    .col(double(Building::Latitude))
                    .col(double(Building::Longitude))
                    .col(string(Building::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Building::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Building {
    #[sea_orm(iden = "buildings")]
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Address,
}
