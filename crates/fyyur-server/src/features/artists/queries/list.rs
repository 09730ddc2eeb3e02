//! List artists query: id and name of every artist, in creation order

use sqlx::SqlitePool;

use crate::db;
use crate::models::ArtistSummary;

#[derive(Debug, thiserror::Error)]
pub enum ListArtistsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool) -> Result<Vec<ArtistSummary>, ListArtistsError> {
    let mut conn = pool.acquire().await?;
    Ok(db::artists::list(&mut conn).await?)
}
