//! Artist search query

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::listing::{upcoming_counts, ListedEntity, SearchResults};

#[derive(Debug, Clone)]
pub struct SearchArtistsQuery {
    /// Case-insensitive substring of the artist name; empty matches every artist
    pub search_term: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchArtistsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(search_term = %query.search_term))]
pub async fn handle(
    pool: SqlitePool,
    query: SearchArtistsQuery,
    now: DateTime<Utc>,
) -> Result<SearchResults, SearchArtistsError> {
    let mut conn = pool.acquire().await?;
    let artists = db::artists::search_by_name(&mut conn, &query.search_term).await?;
    let counts = upcoming_counts(&db::shows::artist_start_times(&mut conn).await?, now);

    let data = artists
        .into_iter()
        .map(|a| ListedEntity::new(a.id, a.name, &counts))
        .collect();

    Ok(SearchResults::new(query.search_term, data))
}
