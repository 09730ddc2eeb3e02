//! HTTP surface: router assembly and the server loop

pub mod response;

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use sqlx::SqlitePool;
use tokio::{signal, sync::Notify};
use tracing::info;

use crate::config::ServerConfig;
use crate::db;
use crate::error::AppError;
use crate::features;
use crate::middleware;
use response::ApiResponse;

/// Build the application router with every route and middleware layer
pub fn create_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .with_state(pool.clone())
        .merge(features::router(pool))
        .fallback(not_found)
        // Layers apply from innermost to outermost
        .layer(middleware::catch_panic_layer())
        .layer(middleware::tracing_layer())
}

/// Serve `app` until Ctrl+C or SIGTERM, then drain open connections for at
/// most `shutdown_timeout_secs`.
pub async fn serve(config: &ServerConfig, app: Router) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let signalled = Arc::clone(&signalled);
        async move {
            shutdown_signal().await;
            signalled.notify_one();
        }
    });

    let timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let deadline = async {
        signalled.notified().await;
        info!("Waiting up to {} seconds for connections to close", timeout.as_secs());
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        _ = deadline => tracing::warn!("Shutdown timeout elapsed, dropping open connections"),
    }

    info!("Server shut down");
    Ok(())
}

async fn home() -> Response {
    ApiResponse::success(json!({
        "name": "Fyyur",
        "version": env!("CARGO_PKG_VERSION"),
        "links": {
            "venues": "/venues",
            "artists": "/artists",
            "shows": "/shows",
        },
    }))
    .into_response()
}

async fn health(State(pool): State<SqlitePool>) -> Result<Response, AppError> {
    db::health_check(&pool).await?;
    Ok(ApiResponse::success(json!({
        "status": "healthy",
        "database": "connected",
    }))
    .into_response())
}

async fn not_found() -> AppError {
    AppError::NotFound("The requested page does not exist".to_string())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => info!("Received terminate signal, starting graceful shutdown"),
    }
}
