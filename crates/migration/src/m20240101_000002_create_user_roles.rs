//! Create `user_roles` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(uuid(UserRoles::Id).primary_key())
                    .col(string(UserRoles::Name))
                    .col(text(UserRoles::Description))
                    .col(string(UserRoles::AppHandle))
                    .col(string(UserRoles::AppIcon))
                    .col(string_len(UserRoles::AppColorHex, 16))
                    .col(boolean(UserRoles::IsLocked).default(false))
                    .col(boolean(UserRoles::IsDeleted).default(false))
                    .col(boolean(UserRoles::IsFixture).default(false))
                    .col(timestamp_with_time_zone(UserRoles::CreatedAt))
                    .col(timestamp_with_time_zone_null(UserRoles::UpdatedAt))
                    .col(timestamp_with_time_zone_null(UserRoles::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserRoles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum UserRoles {
    Table,
    Id,
    Name,
    Description,
    AppHandle,
    AppIcon,
    AppColorHex,
    IsLocked,
    IsDeleted,
    IsFixture,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
