//! Process lifecycle: connect, bind, serve, shut down.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::app::{self, AppState, RouteGroups};
use crate::config::{Config, ConfigError};
use crate::db;

/// Failures that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connect to the database, then serve the API until a shutdown signal.
///
/// Nothing is bound if the database is unreachable.
pub async fn run(config: Config, groups: RouteGroups) -> Result<(), StartupError> {
    let pool = db::connect(&config.database).await?;

    let mounted: Vec<String> = groups.prefixes().map(|p| format!("/api{p}")).collect();
    if mounted.is_empty() {
        tracing::warn!("no route groups mounted; only /api/health is served");
    } else {
        tracing::info!(groups = ?mounted, "route groups mounted");
    }

    let app = app::build_app(AppState::new(pool.clone()), groups, &config.http);

    let addr = SocketAddr::new(config.http.host, config.http.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let port = listener
        .local_addr()
        .map_err(StartupError::Serve)?
        .port();
    tracing::info!("Server running on port {port}");
    tracing::info!("API available at http://localhost:{port}/api");

    let result = serve(listener, app, shutdown_signal()).await;

    pool.close().await;
    tracing::info!("server stopped");
    result
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
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
                tracing::warn!("failed to listen for SIGTERM: {e}");
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

    tracing::info!("shutdown signal received");
}
