//! Update artist command
//!
//! Replaces every attribute and the genre list of an existing artist. Shows
//! already listed keep the image link they were created with.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::artists::form::ArtistForm;
use crate::features::shared::forms::{FieldErrors, FormFields};

#[derive(Debug, Clone)]
pub struct UpdateArtistCommand {
    pub id: i64,
    pub form: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateArtistResponse {
    pub id: i64,
    pub name: String,
}

/// Errors that can occur when updating an artist
#[derive(Debug, thiserror::Error)]
pub enum UpdateArtistError {
    #[error("Artist form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Artist with id {0} not found")]
    NotFound(i64),

    #[error("Database error while updating artist {id}: {source}")]
    Database {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
}

impl UpdateArtistCommand {
    pub fn submitted_name(&self) -> &str {
        self.form.get("name").unwrap_or_default()
    }
}

#[tracing::instrument(skip(pool, command), fields(artist_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateArtistCommand,
) -> Result<UpdateArtistResponse, UpdateArtistError> {
    let fields = ArtistForm::validate(&command.form).map_err(UpdateArtistError::Validation)?;

    let id = command.id;
    let db_error = |source: sqlx::Error| UpdateArtistError::Database { id, source };

    let mut tx = pool.begin().await.map_err(db_error)?;
    if !db::artists::update(&mut *tx, id, &fields).await.map_err(db_error)? {
        return Err(UpdateArtistError::NotFound(id));
    }
    tx.commit().await.map_err(db_error)?;

    tracing::info!("Artist updated");

    Ok(UpdateArtistResponse {
        id,
        name: fields.name,
    })
}
