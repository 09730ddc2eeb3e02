//! Edit venue form query: the venue form schema prefilled with stored values

use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::forms::FormSchema;
use crate::features::venues::form::VenueForm;

#[derive(Debug, thiserror::Error)]
pub enum VenueEditFormError {
    #[error("Venue with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<FormSchema, VenueEditFormError> {
    let mut conn = pool.acquire().await?;
    let venue = db::venues::find_by_id(&mut conn, id)
        .await?
        .ok_or(VenueEditFormError::NotFound(id))?;

    Ok(VenueForm::prefilled(&venue))
}
