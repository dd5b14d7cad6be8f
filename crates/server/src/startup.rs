use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse::<SocketAddr>()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))?;
    Ok(addr)
}

/// Prepare the data directory, open the pool, create the schema and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(cfg)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let state = ServerState::new(db);
    Ok(routes::build_router(state, build_cors(), &cfg.frontend.index_path))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Run the HTTP server with an already validated config until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, index = %cfg.frontend.index_path, database = %cfg.database.url, "starting job tracker server");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, ctrl_c()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = 5000;
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());

        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
