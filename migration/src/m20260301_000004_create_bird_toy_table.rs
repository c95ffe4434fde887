use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_bird_table::Bird;
use super::m20260301_000003_create_toy_table::Toy;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BirdToy::Table)
                    .if_not_exists()
                    .col(integer(BirdToy::BirdId))
                    .col(integer(BirdToy::ToyId))
                    .primary_key(
                        Index::create()
                            .name("pk_bird_toy")
                            .col(BirdToy::BirdId)
                            .col(BirdToy::ToyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_toy_bird_id")
                            .from(BirdToy::Table, BirdToy::BirdId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_toy_toy_id")
                            .from(BirdToy::Table, BirdToy::ToyId)
                            .to(Toy::Table, Toy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BirdToy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BirdToy {
    Table,
    BirdId,
    ToyId,
}
