//! Delete venue command
//!
//! Removes a venue together with its shows and genres. Deleting an id that
//! does not exist is reported as not found.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;

#[derive(Debug, Clone)]
pub struct DeleteVenueCommand {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteVenueResponse {
    pub id: i64,
    pub name: String,
    pub deleted: bool,
}

/// Errors that can occur when deleting a venue
#[derive(Debug, thiserror::Error)]
pub enum DeleteVenueError {
    #[error("Venue with id {0} not found")]
    NotFound(i64),

    #[error("Database error while deleting venue {id}: {source}")]
    Database {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
}

#[tracing::instrument(skip(pool), fields(venue_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteVenueCommand,
) -> Result<DeleteVenueResponse, DeleteVenueError> {
    let id = command.id;
    let db_error = |source: sqlx::Error| DeleteVenueError::Database { id, source };

    let mut tx = pool.begin().await.map_err(db_error)?;

    let venue = db::venues::find_by_id(&mut *tx, id)
        .await
        .map_err(db_error)?
        .ok_or(DeleteVenueError::NotFound(id))?;

    if !db::venues::delete(&mut *tx, id).await.map_err(db_error)? {
        return Err(DeleteVenueError::NotFound(id));
    }
    tx.commit().await.map_err(db_error)?;

    tracing::info!(name = %venue.name, "Venue deleted");

    Ok(DeleteVenueResponse {
        id,
        name: venue.name,
        deleted: true,
    })
}
