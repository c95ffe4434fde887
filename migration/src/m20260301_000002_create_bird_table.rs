use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bird::Table)
                    .if_not_exists()
                    .col(pk_auto(Bird::Id))
                    .col(string_len(Bird::Name, 100))
                    .col(string_len(Bird::Breed, 100))
                    .col(string_len(Bird::Description, 250))
                    .col(integer(Bird::Age))
                    .col(integer(Bird::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_user_id")
                            .from(Bird::Table, Bird::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bird_user_id")
                    .table(Bird::Table)
                    .col(Bird::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bird::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bird {
    Table,
    Id,
    Name,
    Breed,
    Description,
    Age,
    UserId,
}
