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
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(string_len(Photo::Url, 200))
                    .col(integer(Photo::BirdId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_bird_id")
                            .from(Photo::Table, Photo::BirdId)
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
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    Table,
    Id,
    Url,
    BirdId,
}
