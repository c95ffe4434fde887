use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_bird_table::Bird;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feeding::Table)
                    .if_not_exists()
                    .col(pk_auto(Feeding::Id))
                    .col(date(Feeding::Date))
                    .col(string_len(Feeding::Meal, 1).default("B"))
                    .col(integer(Feeding::BirdId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feeding_bird_id")
                            .from(Feeding::Table, Feeding::BirdId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feeding::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feeding {
    Table,
    Id,
    Date,
    Meal,
    BirdId,
}
