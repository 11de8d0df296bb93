//! `user_codes` table: invite codes granting a role within a validity window.
use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub role: String,
    pub valid_from: DateTimeWithTimeZone,
    pub valid_to: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub deleted_at: Option<DateTimeWithTimeZone>,
    pub is_fixture: bool,
    pub is_test: bool,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Mark a live row deleted in one statement. `None` when no live row matched.
pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut rows = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::DeletedAt, Expr::value(Some(now)))
        .filter(Column::Id.eq(id))
        .filter(Column::IsDeleted.eq(false))
        .exec_with_returning(db)
        .await?;
    Ok(rows.pop())
}

/// Hard-delete every row, deleted or not.
pub async fn purge(db: &DatabaseConnection) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}
