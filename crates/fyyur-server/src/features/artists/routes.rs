//! Artist routes
//!
//! # Route Structure
//!
//! - `GET /artists` - Every artist's id and name
//! - `POST /artists/search` - Search artists by name (form field `search_term`)
//! - `GET /artists/create` - Empty artist form
//! - `POST /artists/create` - Create an artist
//! - `GET /artists/:id` - Artist profile with past and upcoming shows
//! - `GET /artists/:id/edit` - Artist form prefilled with current values
//! - `POST /artists/:id/edit` - Update an artist, then redirect to its profile

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;
use sqlx::SqlitePool;

use super::{
    commands::{CreateArtistCommand, CreateArtistError, UpdateArtistCommand, UpdateArtistError},
    form::ArtistForm,
    queries::{
        ArtistEditFormError, GetArtistError, GetArtistQuery, ListArtistsError, SearchArtistsError,
        SearchArtistsQuery,
    },
};
use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::shared::{
    notice::{self, Action},
    DateFormatQuery, FormFields,
};

pub fn artists_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_artists))
        .route("/search", post(search_artists))
        .route("/create", get(create_artist_form).post(create_artist))
        .route("/:id", get(get_artist))
        .route("/:id/edit", get(edit_artist_form).post(update_artist))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

#[tracing::instrument(skip(pool, form))]
async fn create_artist(
    State(pool): State<SqlitePool>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, ArtistApiError> {
    let command = CreateArtistCommand {
        form: FormFields::from(form),
    };
    let name = command.submitted_name().to_string();

    let response = super::commands::create::handle(pool, command)
        .await
        .map_err(|e| ArtistApiError::Create(name, e))?;

    let message = notice::succeeded("Artist", &response.name, Action::Listed);
    Ok(ApiResponse::with_notice(response, message).with_status(StatusCode::CREATED))
}

#[tracing::instrument(skip(pool, form))]
async fn update_artist(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, ArtistApiError> {
    let command = UpdateArtistCommand {
        id,
        form: FormFields::from(form),
    };
    let name = command.submitted_name().to_string();

    super::commands::update::handle(pool, command)
        .await
        .map_err(|e| ArtistApiError::Update(name, e))?;

    Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool))]
async fn list_artists(State(pool): State<SqlitePool>) -> Result<Response, ArtistApiError> {
    let artists = super::queries::list::handle(pool).await?;
    Ok(ApiResponse::success(artists).into_response())
}

#[tracing::instrument(skip(pool, form))]
async fn search_artists(
    State(pool): State<SqlitePool>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, ArtistApiError> {
    let form = FormFields::from(form);
    let query = SearchArtistsQuery {
        search_term: form.get("search_term").unwrap_or_default().to_string(),
    };

    let results = super::queries::search::handle(pool, query, Utc::now()).await?;
    Ok(ApiResponse::success(results).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_artist(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(params): Query<DateFormatQuery>,
) -> Result<Response, ArtistApiError> {
    let query = GetArtistQuery {
        id,
        date_format: params.date_format,
    };
    let profile = super::queries::get::handle(pool, query, Utc::now()).await?;
    Ok(ApiResponse::success(profile).into_response())
}

async fn create_artist_form() -> Response {
    ApiResponse::success(ArtistForm::schema()).into_response()
}

#[tracing::instrument(skip(pool))]
async fn edit_artist_form(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, ArtistApiError> {
    let schema = super::queries::edit_form::handle(pool, id).await?;
    Ok(ApiResponse::success(schema).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum ArtistApiError {
    Create(String, CreateArtistError),
    Update(String, UpdateArtistError),
    List(ListArtistsError),
    Search(SearchArtistsError),
    Get(GetArtistError),
    EditForm(ArtistEditFormError),
}

impl From<ListArtistsError> for ArtistApiError {
    fn from(err: ListArtistsError) -> Self {
        Self::List(err)
    }
}

impl From<SearchArtistsError> for ArtistApiError {
    fn from(err: SearchArtistsError) -> Self {
        Self::Search(err)
    }
}

impl From<GetArtistError> for ArtistApiError {
    fn from(err: GetArtistError) -> Self {
        Self::Get(err)
    }
}

impl From<ArtistEditFormError> for ArtistApiError {
    fn from(err: ArtistEditFormError) -> Self {
        Self::EditForm(err)
    }
}

fn not_found(id: i64) -> Response {
    ErrorResponse::new("NOT_FOUND", format!("Artist with id {} not found", id))
        .into_response_with(StatusCode::NOT_FOUND)
}

fn validation_failed(errors: serde_json::Value, notice: String) -> Response {
    ErrorResponse::with_details("VALIDATION_ERROR", "Artist form is invalid", errors)
        .notice(notice)
        .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
}

impl IntoResponse for ArtistApiError {
    fn into_response(self) -> Response {
        let internal = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");

        match self {
            ArtistApiError::Create(name, CreateArtistError::Validation(errors)) => {
                validation_failed(errors.to_json(), notice::failed("Artist", &name, Action::Listed))
            },
            ArtistApiError::Create(name, err @ CreateArtistError::Database { .. }) => {
                tracing::error!(error = %err, "Database error during artist creation");
                internal
                    .notice(notice::failed("Artist", &name, Action::Listed))
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },

            ArtistApiError::Update(name, UpdateArtistError::Validation(errors)) => {
                validation_failed(errors.to_json(), notice::failed("Artist", &name, Action::Updated))
            },
            ArtistApiError::Update(_, UpdateArtistError::NotFound(id)) => not_found(id),
            ArtistApiError::Update(name, err @ UpdateArtistError::Database { .. }) => {
                tracing::error!(error = %err, "Database error during artist update");
                internal
                    .notice(notice::failed("Artist", &name, Action::Updated))
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },

            ArtistApiError::Get(GetArtistError::NotFound(id))
            | ArtistApiError::EditForm(ArtistEditFormError::NotFound(id)) => not_found(id),

            ArtistApiError::Get(GetArtistError::Database(e))
            | ArtistApiError::EditForm(ArtistEditFormError::Database(e))
            | ArtistApiError::List(ListArtistsError::Database(e))
            | ArtistApiError::Search(SearchArtistsError::Database(e)) => {
                tracing::error!(error = %e, "Database error while reading artists");
                internal.into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            ArtistApiError::Get(GetArtistError::NotFound(2)).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ArtistApiError::List(ListArtistsError::Database(sqlx::Error::PoolClosed))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
