use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use common::LatencyInjector;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::{AdminState, RecordService};

pub mod admin;
pub mod invite_codes;
pub mod meta;
pub mod roles;

/// Body of a successful soft delete.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Sleep for the injected delay, if any, before serving a record request.
async fn inject_latency(State(latency): State<Arc<LatencyInjector>>, req: Request, next: Next) -> Response {
    latency.apply().await;
    next.run(req).await
}

fn invite_routes(svc: Arc<crate::state::InviteCodes>) -> Router {
    Router::new()
        .route("/invite-codes", post(invite_codes::create).get(invite_codes::list_all))
        .route("/invite-codes/filter", get(invite_codes::list_filtered))
        .route(
            "/invite-codes/:id",
            get(invite_codes::get).put(invite_codes::update).delete(invite_codes::delete),
        )
        .with_state(svc)
}

fn role_routes(svc: Arc<crate::state::UserRoles>) -> Router {
    Router::new()
        .route("/roles", post(roles::create).get(roles::list_all))
        .route("/roles/filter", get(roles::list_filtered))
        .route("/roles/:id", get(roles::get).put(roles::update).delete(roles::delete))
        .with_state(svc)
}

/// Full application router for one record service.
pub fn build_router(service: RecordService, latency: Arc<LatencyInjector>, cors: CorsLayer) -> Router {
    let admin_state = AdminState { kind: service.kind(), fixtures: service.fixtures(), latency: latency.clone() };

    let records = match service {
        RecordService::Invite(svc) => invite_routes(svc),
        RecordService::Role(svc) => role_routes(svc),
    }
    .route("/version", get(meta::version))
    .route_layer(middleware::from_fn_with_state(latency, inject_latency));

    let admin_routes = Router::new()
        .route("/admin/fixtures", post(admin::seed_fixtures))
        .route("/admin/latency", post(admin::toggle_latency))
        .with_state(admin_state);

    let public = Router::new()
        .route("/health", get(meta::health))
        .route("/api-docs/openapi.json", get(meta::openapi_json));

    public
        .merge(records)
        .merge(admin_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
