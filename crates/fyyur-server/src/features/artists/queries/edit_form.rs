//! Edit artist form query

use sqlx::SqlitePool;

use crate::db;
use crate::features::artists::form::ArtistForm;
use crate::features::shared::forms::FormSchema;

#[derive(Debug, thiserror::Error)]
pub enum ArtistEditFormError {
    #[error("Artist with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<FormSchema, ArtistEditFormError> {
    let mut conn = pool.acquire().await?;
    let artist = db::artists::find_by_id(&mut conn, id)
        .await?
        .ok_or(ArtistEditFormError::NotFound(id))?;

    Ok(ArtistForm::prefilled(&artist))
}
