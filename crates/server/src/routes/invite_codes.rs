use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use service::invite::domain::{InviteCode, InviteCodeFilter, InviteCodeUpdate};

use crate::errors::JsonApiError;
use crate::routes::DeleteResponse;
use crate::state::InviteCodes;
use crate::streaming::ndjson;

#[utoipa::path(
    post,
    path = "/invite-codes",
    tag = "invite-codes",
    request_body = InviteCode,
    responses((status = 200, body = InviteCode), (status = 500, body = JsonApiError))
)]
pub async fn create(State(svc): State<Arc<InviteCodes>>, Json(input): Json<InviteCode>) -> Result<Json<InviteCode>, JsonApiError> {
    Ok(Json(svc.create(input).await?))
}

#[utoipa::path(
    get,
    path = "/invite-codes/{id}",
    tag = "invite-codes",
    params(("id" = String, Path, description = "Record id (UUID)")),
    responses((status = 200, body = InviteCode), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn get(State(svc): State<Arc<InviteCodes>>, Path(id): Path<String>) -> Result<Json<InviteCode>, JsonApiError> {
    Ok(Json(svc.get(&id).await?))
}

#[utoipa::path(
    put,
    path = "/invite-codes/{id}",
    tag = "invite-codes",
    params(("id" = String, Path, description = "Record id (UUID)")),
    request_body = InviteCodeUpdate,
    responses((status = 200, body = InviteCode), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn update(
    State(svc): State<Arc<InviteCodes>>,
    Path(id): Path<String>,
    Json(input): Json<InviteCodeUpdate>,
) -> Result<Json<InviteCode>, JsonApiError> {
    Ok(Json(svc.update(&id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/invite-codes/{id}",
    tag = "invite-codes",
    params(("id" = String, Path, description = "Record id (UUID)")),
    responses((status = 200, body = DeleteResponse), (status = 400, body = JsonApiError), (status = 404, body = JsonApiError))
)]
pub async fn delete(State(svc): State<Arc<InviteCodes>>, Path(id): Path<String>) -> Result<Json<DeleteResponse>, JsonApiError> {
    let success = svc.delete(&id).await?;
    Ok(Json(DeleteResponse { success }))
}

#[utoipa::path(
    get,
    path = "/invite-codes",
    tag = "invite-codes",
    responses((status = 200, description = "One record per line", content_type = "application/x-ndjson", body = [InviteCode]))
)]
pub async fn list_all(State(svc): State<Arc<InviteCodes>>) -> Result<Response, JsonApiError> {
    Ok(ndjson(svc.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/invite-codes/filter",
    tag = "invite-codes",
    params(InviteCodeFilter),
    responses((status = 200, description = "Matching records, one per line", content_type = "application/x-ndjson", body = [InviteCode]))
)]
pub async fn list_filtered(
    State(svc): State<Arc<InviteCodes>>,
    Query(filter): Query<InviteCodeFilter>,
) -> Result<Response, JsonApiError> {
    Ok(ndjson(svc.list_filtered(filter).await?))
}
