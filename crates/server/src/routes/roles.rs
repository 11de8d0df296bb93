use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use service::role::domain::{UserRole, UserRoleFilter, UserRoleUpdate};

use crate::errors::JsonApiError;
use crate::routes::DeleteResponse;
use crate::state::UserRoles;
use crate::streaming::ndjson;

#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    request_body = UserRole,
    responses((status = 200, body = UserRole), (status = 500, body = JsonApiError))
)]
pub async fn create(State(svc): State<Arc<UserRoles>>, Json(input): Json<UserRole>) -> Result<Json<UserRole>, JsonApiError> {
    Ok(Json(svc.create(input).await?))
}

#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "roles",
    params(("id" = String, Path, description = "Record id (UUID)")),
    responses((status = 200, body = UserRole), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn get(State(svc): State<Arc<UserRoles>>, Path(id): Path<String>) -> Result<Json<UserRole>, JsonApiError> {
    Ok(Json(svc.get(&id).await?))
}

#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "roles",
    params(("id" = String, Path, description = "Record id (UUID)")),
    request_body = UserRoleUpdate,
    responses((status = 200, body = UserRole), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn update(
    State(svc): State<Arc<UserRoles>>,
    Path(id): Path<String>,
    Json(input): Json<UserRoleUpdate>,
) -> Result<Json<UserRole>, JsonApiError> {
    Ok(Json(svc.update(&id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "roles",
    params(("id" = String, Path, description = "Record id (UUID)")),
    responses((status = 200, body = DeleteResponse), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn delete(State(svc): State<Arc<UserRoles>>, Path(id): Path<String>) -> Result<Json<DeleteResponse>, JsonApiError> {
    let success = svc.delete(&id).await?;
    Ok(Json(DeleteResponse { success }))
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    responses((status = 200, description = "One record per line", content_type = "application/x-ndjson", body = [UserRole]))
)]
pub async fn list_all(State(svc): State<Arc<UserRoles>>) -> Result<Response, JsonApiError> {
    Ok(ndjson(svc.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/roles/filter",
    tag = "roles",
    params(UserRoleFilter),
    responses((status = 200, description = "Matching records, one per line", content_type = "application/x-ndjson", body = [UserRole]))
)]
pub async fn list_filtered(
    State(svc): State<Arc<UserRoles>>,
    Query(filter): Query<UserRoleFilter>,
) -> Result<Response, JsonApiError> {
    Ok(ndjson(svc.list_filtered(filter).await?))
}
