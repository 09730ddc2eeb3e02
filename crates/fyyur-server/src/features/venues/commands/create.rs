//! Create venue command
//!
//! Validates the submitted form, then writes the venue row and its genre rows
//! in one transaction.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::forms::{FieldErrors, FormFields};
use crate::features::venues::form::VenueForm;

/// Command to create a new venue from a submitted form
#[derive(Debug, Clone)]
pub struct CreateVenueCommand {
    pub form: FormFields,
}

/// Response from creating a venue
#[derive(Debug, Clone, Serialize)]
pub struct CreateVenueResponse {
    pub id: i64,
    pub name: String,
}

/// Errors that can occur when creating a venue
#[derive(Debug, thiserror::Error)]
pub enum CreateVenueError {
    #[error("Venue form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Database error while listing venue '{name}': {source}")]
    Database {
        name: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CreateVenueCommand {
    /// Name as submitted, for notices; may be blank.
    pub fn submitted_name(&self) -> &str {
        self.form.get("name").unwrap_or_default()
    }
}

#[tracing::instrument(skip(pool, command), fields(name = %command.submitted_name()))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateVenueCommand,
) -> Result<CreateVenueResponse, CreateVenueError> {
    let fields = VenueForm::validate(&command.form).map_err(CreateVenueError::Validation)?;

    let db_error = |source: sqlx::Error| CreateVenueError::Database {
        name: fields.name.clone(),
        source,
    };

    let mut tx = pool.begin().await.map_err(db_error)?;
    let id = db::venues::insert(&mut *tx, &fields).await.map_err(db_error)?;
    tx.commit().await.map_err(db_error)?;

    tracing::info!(venue_id = id, "Venue created");

    Ok(CreateVenueResponse {
        id,
        name: fields.name,
    })
}
