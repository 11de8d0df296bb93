use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_user_codes::UserCodes;
use crate::m20240101_000002_create_user_roles::UserRoles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unique over every row, soft-deleted ones included.
        manager
            .create_index(
                Index::create()
                    .name("uniq_user_codes_code")
                    .table(UserCodes::Table)
                    .col(UserCodes::Code)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_codes_valid_from")
                    .table(UserCodes::Table)
                    .col((UserCodes::ValidFrom, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_codes_valid_to")
                    .table(UserCodes::Table)
                    .col((UserCodes::ValidTo, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_user_roles_name")
                    .table(UserRoles::Table)
                    .col(UserRoles::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_user_codes_code").table(UserCodes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_codes_valid_from").table(UserCodes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_codes_valid_to").table(UserCodes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_user_roles_name").table(UserRoles::Table).to_owned())
            .await
    }
}
