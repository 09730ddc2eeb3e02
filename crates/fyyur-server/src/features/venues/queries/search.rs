//! Venue search query

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::listing::{upcoming_counts, ListedEntity, SearchResults};

#[derive(Debug, Clone)]
pub struct SearchVenuesQuery {
    /// Case-insensitive substring of the venue name; empty matches every venue
    pub search_term: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchVenuesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(search_term = %query.search_term))]
pub async fn handle(
    pool: SqlitePool,
    query: SearchVenuesQuery,
    now: DateTime<Utc>,
) -> Result<SearchResults, SearchVenuesError> {
    let mut conn = pool.acquire().await?;
    let venues = db::venues::search_by_name(&mut conn, &query.search_term).await?;
    let counts = upcoming_counts(&db::shows::venue_start_times(&mut conn).await?, now);

    let data = venues
        .into_iter()
        .map(|v| ListedEntity::new(v.id, v.name, &counts))
        .collect();

    Ok(SearchResults::new(query.search_term, data))
}
