use std::net::SocketAddr;
use std::sync::Arc;

use common::LatencyInjector;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::invite::repository::mock::MockInviteCodeRepository;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::build_router;
use server::state::RecordService;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let service = RecordService::invite(Arc::new(MockInviteCodeRepository::default()));
    let app = build_router(service, Arc::new(LatencyInjector::default()), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "SERVING");
    Ok(())
}

#[tokio::test]
async fn e2e_fixtures_then_stream_by_role() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/admin/fixtures", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"purged": 0, "inserted": 117}));

    let res = c
        .get(format!("{}/invite-codes/filter", app.base_url))
        .query(&[("role", "director")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    let rows: Vec<Value> = text.lines().map(serde_json::from_str::<Value>).collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["role"] == "director" && r["is_fixture"] == true));

    // each fixture code is individually addressable
    let code = rows[0]["code"].as_str().unwrap_or_default().to_string();
    let res = c
        .get(format!("{}/invite-codes/filter", app.base_url))
        .query(&[("code", code.as_str())])
        .send()
        .await?;
    assert_eq!(res.text().await?.lines().count(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_deletes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created: Value = c
        .post(format!("{}/invite-codes", app.base_url))
        .json(&json!({"code": "RACE", "role": "admin"}))
        .send()
        .await?
        .json()
        .await?;
    let url = format!("{}/invite-codes/{}", app.base_url, created["id"].as_str().unwrap_or_default());

    let (a, b) = tokio::join!(c.delete(&url).send(), c.delete(&url).send());
    let mut statuses = vec![a?.status(), b?.status()];
    statuses.sort();
    assert_eq!(statuses, vec![HttpStatusCode::OK, HttpStatusCode::NOT_FOUND]);
    Ok(())
}
