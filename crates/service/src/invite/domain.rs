use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Invite code as exchanged with clients. Missing fields take their defaults,
/// validity bounds default to the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InviteCode {
    /// Hyphenated UUID; ignored on create.
    pub id: String,
    pub code: String,
    pub role: String,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_fixture: bool,
    pub is_test: bool,
    pub is_deleted: bool,
}

/// Fields an update may overwrite. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InviteCodeUpdate {
    pub code: Option<String>,
    pub role: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
}

/// Optional equality criteria for filtered listing; empty strings are unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct InviteCodeFilter {
    pub code: Option<String>,
    pub role: Option<String>,
}

/// Store-side change set produced from an [`InviteCodeUpdate`].
#[derive(Debug, Clone, PartialEq)]
pub struct InviteCodeChanges {
    pub code: Option<String>,
    pub role: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
