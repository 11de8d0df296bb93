use utoipa::OpenApi;
use utoipa::ToSchema;

use service::invite::domain::{InviteCode, InviteCodeUpdate};
use service::role::domain::{UserRole, UserRoleUpdate};
use service::FixtureReport;

use crate::errors::JsonApiError;
use crate::routes::admin::LatencyStatus;
use crate::routes::DeleteResponse;

#[derive(ToSchema)]
pub struct HealthResponse {
    /// Always `SERVING`.
    pub status: String,
}

#[derive(ToSchema)]
pub struct VersionResponse {
    /// `v<major>.<minor>.<patch>`
    pub version: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::meta::health,
        crate::routes::meta::version,
        crate::routes::admin::seed_fixtures,
        crate::routes::admin::toggle_latency,
        crate::routes::invite_codes::create,
        crate::routes::invite_codes::get,
        crate::routes::invite_codes::update,
        crate::routes::invite_codes::delete,
        crate::routes::invite_codes::list_all,
        crate::routes::invite_codes::list_filtered,
        crate::routes::roles::create,
        crate::routes::roles::get,
        crate::routes::roles::update,
        crate::routes::roles::delete,
        crate::routes::roles::list_all,
        crate::routes::roles::list_filtered,
    ),
    components(
        schemas(
            HealthResponse,
            VersionResponse,
            InviteCode,
            InviteCodeUpdate,
            UserRole,
            UserRoleUpdate,
            DeleteResponse,
            FixtureReport,
            LatencyStatus,
            JsonApiError,
        )
    ),
    tags(
        (name = "meta", description = "Health and version probes"),
        (name = "admin", description = "Fixture seeding and latency injection"),
        (name = "invite-codes", description = "Invite code records"),
        (name = "roles", description = "User role records"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/invite-codes/{id}", "/roles/filter", "/admin/latency", "/health"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
