use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::{runtime, users::UserService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address `{raw}`: {e}")))
}

/// Open the configured storage backend and build the router around it.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repo = runtime::build_user_repository(cfg).await?;
    let state = AppState { users: UserService::new(repo) };
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.storage.backend, "starting user accounts server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
