use axum::Json;
use common::types::{Health, Version};
use utoipa::OpenApi;

use crate::openapi::{ApiDoc, HealthResponse, VersionResponse};

/// Liveness probe. Always serving; dependencies are not probed.
#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::serving())
}

#[utoipa::path(get, path = "/version", tag = "meta", responses((status = 200, body = VersionResponse)))]
pub async fn version() -> Json<Version> {
    Json(Version::from_semver(env!("CARGO_PKG_VERSION")))
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
