//! Venue profile query
//!
//! Loads the venue (two queries: row and genres) and its own shows (one
//! joined query), then splits the shows around `now`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::datetime::DateFormat;
use crate::features::shared::listing::{partition_shows, PartitionedShows};
use crate::models::Venue;

#[derive(Debug, Clone)]
pub struct GetVenueQuery {
    pub id: i64,
    pub date_format: DateFormat,
}

/// Every stored attribute plus past and upcoming shows
#[derive(Debug, Clone, Serialize)]
pub struct VenueProfile {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: PartitionedShows,
}

#[derive(Debug, thiserror::Error)]
pub enum GetVenueError {
    #[error("Venue with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(venue_id = query.id))]
pub async fn handle(
    pool: SqlitePool,
    query: GetVenueQuery,
    now: DateTime<Utc>,
) -> Result<VenueProfile, GetVenueError> {
    let mut conn = pool.acquire().await?;

    let venue = db::venues::find_by_id(&mut conn, query.id)
        .await?
        .ok_or(GetVenueError::NotFound(query.id))?;
    let shows = db::shows::list_for_venue(&mut conn, query.id).await?;

    Ok(VenueProfile {
        venue,
        shows: partition_shows(shows, now, query.date_format),
    })
}
