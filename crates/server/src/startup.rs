use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::{LatencyInjector, ServiceKind};
use configs::AppConfig;
use migration::MigratorTrait;
use service::invite::repo::SeaOrmInviteCodeRepository;
use service::role::repo::SeaOrmUserRoleRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::RecordService;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}: {}", cfg.server.bind_addr(), e)))
}

/// Resolves on SIGINT or, on unix, SIGTERM.
async fn shutdown_signal(kind: ServiceKind) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(service = %kind, event = "shutdown_signal", "shutting down");
}

/// Build the router for `kind` on top of an open database.
pub fn build_app(kind: ServiceKind, db: sea_orm::DatabaseConnection, cfg: &AppConfig) -> Router {
    let service = match kind {
        ServiceKind::Invite => RecordService::invite(Arc::new(SeaOrmInviteCodeRepository { db })),
        ServiceKind::Role => RecordService::role(Arc::new(SeaOrmUserRoleRepository { db })),
    };
    let latency = Arc::new(LatencyInjector::new(cfg.latency.max_delay_ms));
    routes::build_router(service, latency, build_cors())
}

/// Connect, migrate, and serve until a shutdown signal arrives.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!(service = %kind, table = kind.table(), event = "migrated", "schema up to date");

    let app = build_app(kind, db.clone(), &cfg);
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = %kind, %addr, event = "listening", "server started");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(kind)).await?;

    db.close().await?;
    info!(service = %kind, event = "stopped", "database pool closed");
    Ok(())
}
