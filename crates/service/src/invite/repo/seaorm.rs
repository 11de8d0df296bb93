use sea_orm::{sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;
use uuid::Uuid;

use models::invite_code::{self, Column, Entity};

use crate::errors::ServiceError;
use crate::invite::domain::InviteCodeChanges;
use crate::invite::filter::InviteCodePredicate;
use crate::invite::repository::InviteCodeRepository;
use crate::stream::{self, RecordStream};

pub struct SeaOrmInviteCodeRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl InviteCodeRepository for SeaOrmInviteCodeRepository {
    async fn insert(&self, record: invite_code::Model) -> Result<Uuid, ServiceError> {
        let id = if record.id.is_nil() { Uuid::new_v4() } else { record.id };
        let am = invite_code::ActiveModel {
            id: Set(id),
            code: Set(record.code),
            role: Set(record.role),
            valid_from: Set(record.valid_from),
            valid_to: Set(record.valid_to),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
            deleted_at: Set(record.deleted_at),
            is_fixture: Set(record.is_fixture),
            is_test: Set(record.is_test),
            is_deleted: Set(record.is_deleted),
        };
        let created = am.insert(&self.db).await?;
        Ok(created.id)
    }

    async fn find_one(&self, id: Uuid) -> Result<invite_code::Model, ServiceError> {
        Entity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("invite code"))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<invite_code::Model, ServiceError> {
        let deleted = invite_code::soft_delete(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("invite code"))?;
        Ok(deleted)
    }

    async fn update(&self, id: Uuid, changes: InviteCodeChanges) -> Result<invite_code::Model, ServiceError> {
        let updated_at: sea_orm::prelude::DateTimeWithTimeZone = changes.updated_at.into();
        let mut stmt = Entity::update_many().col_expr(Column::UpdatedAt, Expr::value(Some(updated_at)));
        if let Some(code) = changes.code {
            stmt = stmt.col_expr(Column::Code, Expr::value(code));
        }
        if let Some(role) = changes.role {
            stmt = stmt.col_expr(Column::Role, Expr::value(role));
        }
        if let Some(t) = changes.valid_from {
            let t: sea_orm::prelude::DateTimeWithTimeZone = t.into();
            stmt = stmt.col_expr(Column::ValidFrom, Expr::value(t));
        }
        if let Some(t) = changes.valid_to {
            let t: sea_orm::prelude::DateTimeWithTimeZone = t.into();
            stmt = stmt.col_expr(Column::ValidTo, Expr::value(t));
        }
        let mut rows = stmt
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&self.db)
            .await?;
        let updated = rows.pop().ok_or_else(|| ServiceError::not_found("invite code"))?;
        Ok(updated)
    }

    async fn list_all(&self) -> Result<RecordStream<invite_code::Model>, ServiceError> {
        self.list_filtered(InviteCodePredicate::Visible).await
    }

    async fn list_filtered(&self, predicate: InviteCodePredicate) -> Result<RecordStream<invite_code::Model>, ServiceError> {
        stream::cursor::<Entity>(self.db.clone(), predicate.condition()).await
    }

    async fn purge(&self) -> Result<u64, ServiceError> {
        let n = invite_code::purge(&self.db).await?;
        info!(rows = n, "invite_codes_purged");
        Ok(n)
    }
}
