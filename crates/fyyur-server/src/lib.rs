//! Fyyur Server Library
//!
//! Booking directory for live music: venues, artists, and the shows that
//! bring them together.
//!
//! # Overview
//!
//! - **API Endpoints**: JSON payloads for directory, search, profile and form pages
//! - **Database Management**: SQLite through SQLx, with embedded migrations
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: request tracing and panic recovery
//!
//! # Architecture
//!
//! Each entity is a feature slice (`features::venues`, `features::artists`,
//! `features::shows`) split into:
//!
//! - **Commands** (write operations): create, update, delete. Each runs in one
//!   transaction that commits on success and rolls back when dropped.
//! - **Queries** (read operations): directory, search, profile, form prefill.
//!
//! Storage functions in `db` are plain async functions over a
//! `&mut SqliteConnection`; related rows are loaded by explicit queries only.
//!
//! # Example
//!
//! ```no_run
//! use fyyur_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     api::serve(&config.server, api::create_router(pool)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

pub use error::AppError;
