//! Feature slices of the Fyyur API
//!
//! Each entity is a vertical slice with its own commands, queries and routes.
//!
//! # Features
//!
//! - **venues**: grouped directory, search, profile, create, edit, delete
//! - **artists**: list, search, profile, create, edit
//! - **shows**: list and create
//!
//! # Layout
//!
//! - `form.rs` - form schema and intake validation
//! - `commands/` - write operations, each in its own transaction
//! - `queries/` - read operations
//! - `routes.rs` - HTTP route definitions and the feature's error responses

pub mod artists;
pub mod shared;
pub mod shows;
pub mod venues;

use axum::Router;
use sqlx::SqlitePool;

/// Every feature router, mounted under its path prefix:
/// - `/venues`
/// - `/artists`
/// - `/shows`
pub fn router(pool: SqlitePool) -> Router<()> {
    Router::new()
        .nest("/venues", venues::venues_routes().with_state(pool.clone()))
        .nest("/artists", artists::artists_routes().with_state(pool.clone()))
        .nest("/shows", shows::shows_routes().with_state(pool))
}
