use async_trait::async_trait;
use serde::Serialize;

use crate::errors::ServiceError;

/// Outcome of a purge-and-seed run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct FixtureReport {
    pub purged: u64,
    pub inserted: usize,
}

/// Replaces a table's content with a known fixture set.
#[async_trait]
pub trait FixtureSeeder: Send + Sync {
    async fn seed_fixtures(&self) -> Result<FixtureReport, ServiceError>;
}
