//! Create artist command

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::artists::form::ArtistForm;
use crate::features::shared::forms::{FieldErrors, FormFields};

/// Command to create a new artist from a submitted form
#[derive(Debug, Clone)]
pub struct CreateArtistCommand {
    pub form: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateArtistResponse {
    pub id: i64,
    pub name: String,
}

/// Errors that can occur when creating an artist
#[derive(Debug, thiserror::Error)]
pub enum CreateArtistError {
    #[error("Artist form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Database error while listing artist '{name}': {source}")]
    Database {
        name: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CreateArtistCommand {
    pub fn submitted_name(&self) -> &str {
        self.form.get("name").unwrap_or_default()
    }
}

#[tracing::instrument(skip(pool, command), fields(name = %command.submitted_name()))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateArtistCommand,
) -> Result<CreateArtistResponse, CreateArtistError> {
    let fields = ArtistForm::validate(&command.form).map_err(CreateArtistError::Validation)?;

    let db_error = |source: sqlx::Error| CreateArtistError::Database {
        name: fields.name.clone(),
        source,
    };

    let mut tx = pool.begin().await.map_err(db_error)?;
    let id = db::artists::insert(&mut *tx, &fields).await.map_err(db_error)?;
    tx.commit().await.map_err(db_error)?;

    tracing::info!(artist_id = id, "Artist created");

    Ok(CreateArtistResponse {
        id,
        name: fields.name,
    })
}
