use async_trait::async_trait;
use tracing::info;

use super::domain::UserRole;
use super::repository::UserRoleRepository;
use super::service::UserRoleService;
use super::translator;
use crate::errors::ServiceError;
use crate::fixtures::{FixtureReport, FixtureSeeder};

/// (name, app handle, icon, colour) of the seeded roles.
pub const FIXTURE_ROLES: [(&str, &str, &str, &str); 4] = [
    ("ROLE_ADMIN", "admin", "security", "#CB212D"),
    ("ROLE_DIRECTOR", "director", "verified_user", "#77A548"),
    ("ROLE_TEACHER", "teacher", "school", "#38557D"),
    ("ROLE_VIEWER", "viewer", "check", "#F5AE3B"),
];

pub fn fixture_roles() -> Vec<UserRole> {
    FIXTURE_ROLES
        .iter()
        .map(|(name, handle, icon, color)| UserRole {
            name: name.to_string(),
            description: format!("auto-generated role [{name}] using handle [{handle}]"),
            app_handle: handle.to_string(),
            app_icon: icon.to_string(),
            app_color_hex: color.to_string(),
            is_locked: true,
            is_fixture: true,
            ..UserRole::default()
        })
        .collect()
}

#[async_trait]
impl<R: UserRoleRepository + ?Sized> FixtureSeeder for UserRoleService<R> {
    async fn seed_fixtures(&self) -> Result<FixtureReport, ServiceError> {
        let purged = self.repository().purge().await?;
        let mut inserted = 0;
        for role in fixture_roles() {
            self.repository().insert(translator::new_record(role)).await?;
            inserted += 1;
        }
        info!(purged, inserted, "user_role_fixtures_seeded");
        Ok(FixtureReport { purged, inserted })
    }
}
