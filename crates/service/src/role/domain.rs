use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// User role as exchanged with clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserRole {
    pub id: String,
    pub name: String,
    pub description: String,
    pub app_handle: String,
    pub app_icon: String,
    pub app_color_hex: String,
    pub is_locked: bool,
    pub is_deleted: bool,
    pub is_fixture: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserRoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub app_handle: Option<String>,
    pub app_icon: Option<String>,
    pub app_color_hex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct UserRoleFilter {
    pub name: Option<String>,
    pub app_handle: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRoleChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub app_handle: Option<String>,
    pub app_icon: Option<String>,
    pub app_color_hex: Option<String>,
    pub updated_at: DateTime<Utc>,
}
