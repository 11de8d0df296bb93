//! Create `user_codes` table.
//!
//! Uniqueness of `code` is added by the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCodes::Table)
                    .if_not_exists()
                    .col(uuid(UserCodes::Id).primary_key())
                    .col(string(UserCodes::Code))
                    .col(string(UserCodes::Role))
                    .col(timestamp_with_time_zone(UserCodes::ValidFrom))
                    .col(timestamp_with_time_zone(UserCodes::ValidTo))
                    .col(timestamp_with_time_zone(UserCodes::CreatedAt))
                    .col(timestamp_with_time_zone_null(UserCodes::UpdatedAt))
                    .col(timestamp_with_time_zone_null(UserCodes::DeletedAt))
                    .col(boolean(UserCodes::IsFixture).default(false))
                    .col(boolean(UserCodes::IsTest).default(false))
                    .col(boolean(UserCodes::IsDeleted).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserCodes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum UserCodes {
    Table,
    Id,
    Code,
    Role,
    ValidFrom,
    ValidTo,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    IsFixture,
    IsTest,
    IsDeleted,
}
