//! `user_roles` table.
use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub app_handle: String,
    pub app_icon: String,
    pub app_color_hex: String,
    // Informational only; nothing consults it before mutating.
    pub is_locked: bool,
    pub is_deleted: bool,
    pub is_fixture: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

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

pub async fn purge(db: &DatabaseConnection) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}
