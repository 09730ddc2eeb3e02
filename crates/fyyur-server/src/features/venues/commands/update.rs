//! Update venue command
//!
//! Replaces every attribute and the genre list of an existing venue. An
//! invalid form leaves the stored row untouched.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::forms::{FieldErrors, FormFields};
use crate::features::venues::form::VenueForm;

#[derive(Debug, Clone)]
pub struct UpdateVenueCommand {
    pub id: i64,
    pub form: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateVenueResponse {
    pub id: i64,
    pub name: String,
}

/// Errors that can occur when updating a venue
#[derive(Debug, thiserror::Error)]
pub enum UpdateVenueError {
    #[error("Venue form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Venue with id {0} not found")]
    NotFound(i64),

    #[error("Database error while updating venue {id}: {source}")]
    Database {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
}

impl UpdateVenueCommand {
    pub fn submitted_name(&self) -> &str {
        self.form.get("name").unwrap_or_default()
    }
}

#[tracing::instrument(skip(pool, command), fields(venue_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateVenueCommand,
) -> Result<UpdateVenueResponse, UpdateVenueError> {
    let fields = VenueForm::validate(&command.form).map_err(UpdateVenueError::Validation)?;

    let id = command.id;
    let db_error = |source: sqlx::Error| UpdateVenueError::Database { id, source };

    let mut tx = pool.begin().await.map_err(db_error)?;
    let updated = db::venues::update(&mut *tx, id, &fields)
        .await
        .map_err(db_error)?;
    if !updated {
        return Err(UpdateVenueError::NotFound(id));
    }
    tx.commit().await.map_err(db_error)?;

    tracing::info!("Venue updated");

    Ok(UpdateVenueResponse {
        id,
        name: fields.name,
    })
}
