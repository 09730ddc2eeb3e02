//! Create show command
//!
//! Both referents are checked inside the transaction before the insert; the
//! foreign keys catch anything that slips between the check and the write.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::error_helpers::map_foreign_key_violation;
use crate::features::shared::forms::{FieldErrors, FormFields};
use crate::features::shows::form::ShowForm;

#[derive(Debug, Clone)]
pub struct CreateShowCommand {
    pub form: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateShowResponse {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateShowError {
    #[error("Show form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Artist with id {0} not found")]
    ArtistNotFound(i64),

    #[error("Venue with id {0} not found")]
    VenueNotFound(i64),

    #[error("Show references a missing artist or venue")]
    UnknownReferent,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateShowError {
    /// True when the submission named an artist or venue that does not exist
    pub fn is_referent_missing(&self) -> bool {
        matches!(
            self,
            Self::ArtistNotFound(_) | Self::VenueNotFound(_) | Self::UnknownReferent
        )
    }
}

#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateShowCommand,
) -> Result<CreateShowResponse, CreateShowError> {
    let show = ShowForm::validate(&command.form).map_err(CreateShowError::Validation)?;

    let mut tx = pool.begin().await?;

    let image_link = db::artists::find_image_link(&mut *tx, show.artist_id)
        .await?
        .ok_or(CreateShowError::ArtistNotFound(show.artist_id))?;
    if !db::venues::exists(&mut *tx, show.venue_id).await? {
        return Err(CreateShowError::VenueNotFound(show.venue_id));
    }

    let id = db::shows::insert(&mut *tx, &show, image_link.as_deref())
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, CreateShowError::UnknownReferent, CreateShowError::Database)
        })?;
    tx.commit().await?;

    tracing::info!(
        show_id = id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show created"
    );

    Ok(CreateShowResponse {
        id,
        artist_id: show.artist_id,
        venue_id: show.venue_id,
        start_time: show.start_time,
    })
}
