//! Process-level hooks: fixture seeding and latency injection.

use axum::{extract::State, Json};
use serde::Serialize;
use service::FixtureReport;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AdminState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LatencyStatus {
    pub enabled: bool,
    pub delay_ms: u64,
}

/// Purge the service table and insert the fixture set.
#[utoipa::path(
    post,
    path = "/admin/fixtures",
    tag = "admin",
    responses((status = 200, body = FixtureReport), (status = 500, body = JsonApiError))
)]
pub async fn seed_fixtures(State(state): State<AdminState>) -> Result<Json<FixtureReport>, JsonApiError> {
    let report = state.fixtures.seed_fixtures().await?;
    info!(service = %state.kind, event = "fixtures_seeded", purged = report.purged, inserted = report.inserted, "fixtures seeded");
    Ok(Json(report))
}

/// Flip artificial latency on or off.
#[utoipa::path(post, path = "/admin/latency", tag = "admin", responses((status = 200, body = LatencyStatus)))]
pub async fn toggle_latency(State(state): State<AdminState>) -> Json<LatencyStatus> {
    let delay = state.latency.toggle();
    Json(LatencyStatus { enabled: !delay.is_zero(), delay_ms: delay.as_millis() as u64 })
}
