//! Create `user_account` table.
//!
//! `id` is an auto-increment primary key; SQLite gets `AUTOINCREMENT` and
//! Postgres a `SERIAL`, so ids of deleted rows are never handed out again.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAccount::Id))
                    .col(string_len(UserAccount::Email, 255).not_null())
                    .col(string_len(UserAccount::Name, 255).not_null())
                    .col(date(UserAccount::DateOfBirth).not_null())
                    .col(string_len(UserAccount::Postcode, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserAccount::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserAccount { Table, Id, Email, Name, DateOfBirth, Postcode }
