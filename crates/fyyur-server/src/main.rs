//! Fyyur Server - Main entry point

use anyhow::Result;
use fyyur_common::logging::{init_logging, LogConfig};
use tracing::info;

use fyyur_server::{api, config::Config, db};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Environment variables take precedence over the mode defaults
    let log_config = LogConfig::for_mode(config.server.debug).with_env_overrides()?;
    let _log_guard = init_logging(&log_config)?;

    info!("Starting Fyyur server");
    info!(
        "Configuration loaded - server will bind to {}",
        config.bind_address()
    );

    let pool = db::create_pool(&config.database).await?;
    info!("Database connection pool established");

    db::run_migrations(&pool).await?;

    let app = api::create_router(pool.clone());
    api::serve(&config.server, app).await?;

    pool.close().await;
    info!("Database pool closed");

    Ok(())
}
