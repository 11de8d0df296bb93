use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::time::Instant;

use axum::Router;
use chrono::{DateTime, Utc};
use common::LatencyInjector;
use serde_json::{json, Value};
use service::invite::repository::mock::MockInviteCodeRepository;
use service::role::repository::mock::MockUserRoleRepository;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::build_router;
use server::state::RecordService;

fn invite_app() -> Router {
    let service = RecordService::invite(Arc::new(MockInviteCodeRepository::default()));
    build_router(service, Arc::new(LatencyInjector::new(5)), CorsLayer::very_permissive())
}

fn role_app() -> Router {
    let service = RecordService::role(Arc::new(MockUserRoleRepository::default()));
    build_router(service, Arc::new(LatencyInjector::new(5)), CorsLayer::very_permissive())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json_of(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn ndjson_lines(body: &str) -> Vec<Value> {
    body.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
}

#[tokio::test]
async fn health_and_version() {
    let app = invite_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["status"], "SERVING");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["version"], "v1.0.0");
}

#[tokio::test]
async fn invite_code_lifecycle() {
    let app = invite_app();
    let (status, body) = send(
        &app,
        "POST",
        "/invite-codes",
        Some(json!({"code": "01J9ZQ0000000000000000000A", "role": "teacher", "valid_from": "2030-01-01T00:00:00.750Z"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let created = json_of(&body);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["valid_from"], "2030-01-01T00:00:00Z");
    assert_eq!(created["is_deleted"], false);

    let (status, body) = send(&app, "GET", &format!("/invite-codes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["role"], "teacher");

    let (status, body) = send(&app, "PUT", &format!("/invite-codes/{id}"), Some(json!({"role": "director"}))).await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_of(&body);
    assert_eq!(updated["role"], "director");
    assert_eq!(updated["code"], "01J9ZQ0000000000000000000A");
    assert!(!updated["updated_at"].is_null());

    let (status, body) = send(&app, "DELETE", &format!("/invite-codes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"success": true}));

    let (status, body) = send(&app, "DELETE", &format!("/invite-codes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body)["code"], "NOT_FOUND");

    let (status, _) = send(&app, "GET", &format!("/invite-codes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let app = invite_app();
    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/invite-codes/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["code"], "INVALID_ARGUMENT");
    }
    let (status, _) = send(&app, "PUT", "/invite-codes/not-an-id", Some(json!({"role": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = invite_app();
    let unknown = Uuid::new_v4();
    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, &format!("/invite-codes/{unknown}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&body)["code"], "NOT_FOUND");
    }
    let (status, _) = send(&app, "PUT", &format!("/invite-codes/{unknown}"), Some(json!({"role": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_validity_is_whole_seconds() {
    let app = invite_app();
    let valid_to = Utc::now() + chrono::Duration::days(30);
    let (status, body) = send(
        &app,
        "POST",
        "/invite-codes",
        Some(json!({"code": "SECONDS", "role": "viewer", "valid_to": valid_to.to_rfc3339()})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let stored: DateTime<Utc> = json_of(&body)["valid_to"].as_str().unwrap().parse().unwrap();
    assert_eq!(stored.timestamp(), valid_to.timestamp());
    assert_eq!(stored.timestamp_subsec_nanos(), 0);
}

#[tokio::test]
async fn filtered_listing_streams_ndjson() {
    let app = invite_app();
    let mut codes = Vec::new();
    for (i, role) in ["admin", "viewer", "admin"].iter().enumerate() {
        let code = format!("CODE{i}");
        let (status, _) = send(&app, "POST", "/invite-codes", Some(json!({"code": code, "role": role}))).await;
        assert_eq!(status, StatusCode::OK);
        codes.push(code);
    }

    let (_, body) = send(&app, "GET", "/invite-codes/filter?role=admin", None).await;
    assert_eq!(ndjson_lines(&body).len(), 2);

    let (_, body) = send(&app, "GET", &format!("/invite-codes/filter?code={}&role=", codes[1]), None).await;
    let rows = ndjson_lines(&body);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["role"], "viewer");

    let (_, body) = send(&app, "GET", "/invite-codes/filter", None).await;
    assert_eq!(ndjson_lines(&body).len(), 3);

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/invite-codes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/x-ndjson");
}

#[tokio::test]
async fn role_update_keeps_other_fields() {
    let app = role_app();
    let (_, body) = send(
        &app,
        "POST",
        "/roles",
        Some(json!({"name": "ROLE_EDITOR", "description": "edits", "app_handle": "editor", "app_icon": "edit", "app_color_hex": "#123456", "is_locked": true})),
    )
    .await;
    let id = json_of(&body)["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "PUT", &format!("/roles/{id}"), Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", &format!("/roles/{id}"), None).await;
    let got = json_of(&body);
    assert_eq!(got["name"], "X");
    assert_eq!(got["description"], "edits");
    assert_eq!(got["app_color_hex"], "#123456");
    assert_eq!(got["is_locked"], true);

    let (_, body) = send(&app, "GET", "/roles/filter?app_handle=editor", None).await;
    assert_eq!(ndjson_lines(&body).len(), 1);
}

#[tokio::test]
async fn admin_fixtures_replace_content() {
    let app = role_app();
    let (status, body) = send(&app, "POST", "/admin/fixtures", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"purged": 0, "inserted": 4}));

    let (_, body) = send(&app, "GET", "/roles", None).await;
    let rows = ndjson_lines(&body);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r["is_fixture"] == true && r["is_locked"] == true));

    let (_, body) = send(&app, "POST", "/admin/fixtures", None).await;
    assert_eq!(json_of(&body)["purged"], 4);
}

#[tokio::test]
async fn admin_latency_toggles() {
    let app = invite_app();
    let (_, body) = send(&app, "POST", "/admin/latency", None).await;
    let on = json_of(&body);
    assert_eq!(on["enabled"], true);
    assert!(on["delay_ms"].as_u64().unwrap() >= 1);

    // requests still succeed while the delay is active
    let (status, _) = send(&app, "GET", "/invite-codes", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "POST", "/admin/latency", None).await;
    assert_eq!(json_of(&body), json!({"enabled": false, "delay_ms": 0}));
}

#[tokio::test]
async fn version_probe_waits_out_injected_latency() {
    let latency = Arc::new(LatencyInjector::new(40));
    let service = RecordService::invite(Arc::new(MockInviteCodeRepository::default()));
    let app = build_router(service, latency.clone(), CorsLayer::very_permissive());
    let delay = latency.toggle();
    assert!(!delay.is_zero());

    let started = Instant::now();
    let (status, _) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = role_app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let doc = json_of(&body);
    assert!(doc["paths"]["/roles/{id}"].is_object());
}
