use sea_orm::{sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;
use uuid::Uuid;

use models::user_role::{self, Column, Entity};

use crate::errors::ServiceError;
use crate::role::domain::UserRoleChanges;
use crate::role::filter::UserRolePredicate;
use crate::role::repository::UserRoleRepository;
use crate::stream::{self, RecordStream};

pub struct SeaOrmUserRoleRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRoleRepository for SeaOrmUserRoleRepository {
    async fn insert(&self, record: user_role::Model) -> Result<Uuid, ServiceError> {
        let id = if record.id.is_nil() { Uuid::new_v4() } else { record.id };
        let created = user_role::ActiveModel {
            id: Set(id),
            name: Set(record.name),
            description: Set(record.description),
            app_handle: Set(record.app_handle),
            app_icon: Set(record.app_icon),
            app_color_hex: Set(record.app_color_hex),
            is_locked: Set(record.is_locked),
            is_deleted: Set(record.is_deleted),
            is_fixture: Set(record.is_fixture),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
            deleted_at: Set(record.deleted_at),
        }
        .insert(&self.db)
        .await?;
        Ok(created.id)
    }

    async fn find_one(&self, id: Uuid) -> Result<user_role::Model, ServiceError> {
        Entity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("user role"))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<user_role::Model, ServiceError> {
        let deleted = user_role::soft_delete(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user role"))?;
        Ok(deleted)
    }

    async fn update(&self, id: Uuid, changes: UserRoleChanges) -> Result<user_role::Model, ServiceError> {
        let updated_at: sea_orm::prelude::DateTimeWithTimeZone = changes.updated_at.into();
        let mut stmt = Entity::update_many().col_expr(Column::UpdatedAt, Expr::value(Some(updated_at)));
        let fields = [
            (Column::Name, changes.name),
            (Column::Description, changes.description),
            (Column::AppHandle, changes.app_handle),
            (Column::AppIcon, changes.app_icon),
            (Column::AppColorHex, changes.app_color_hex),
        ];
        for (col, value) in fields {
            if let Some(v) = value {
                stmt = stmt.col_expr(col, Expr::value(v));
            }
        }
        let mut rows = stmt
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&self.db)
            .await?;
        let updated = rows.pop().ok_or_else(|| ServiceError::not_found("user role"))?;
        Ok(updated)
    }

    async fn list_all(&self) -> Result<RecordStream<user_role::Model>, ServiceError> {
        self.list_filtered(UserRolePredicate::Visible).await
    }

    async fn list_filtered(&self, predicate: UserRolePredicate) -> Result<RecordStream<user_role::Model>, ServiceError> {
        stream::cursor::<Entity>(self.db.clone(), predicate.condition()).await
    }

    async fn purge(&self) -> Result<u64, ServiceError> {
        let n = user_role::purge(&self.db).await?;
        info!(rows = n, "user_roles_purged");
        Ok(n)
    }
}
