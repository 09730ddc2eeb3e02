//! Venue routes
//!
//! # Route Structure
//!
//! - `GET /venues` - Venue directory grouped by city
//! - `POST /venues/search` - Search venues by name (form field `search_term`)
//! - `GET /venues/create` - Empty venue form
//! - `POST /venues/create` - Create a venue
//! - `GET /venues/:id` - Venue profile with past and upcoming shows
//! - `DELETE /venues/:id` - Delete a venue and its shows
//! - `GET /venues/:id/edit` - Venue form prefilled with current values
//! - `POST /venues/:id/edit` - Update a venue, then redirect to its profile

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
    commands::{
        CreateVenueCommand, CreateVenueError, DeleteVenueCommand, DeleteVenueError,
        UpdateVenueCommand, UpdateVenueError,
    },
    form::VenueForm,
    queries::{
        GetVenueError, GetVenueQuery, SearchVenuesError, SearchVenuesQuery, VenueDirectoryError,
        VenueEditFormError,
    },
};
use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::shared::{
    notice::{self, Action},
    DateFormatQuery, FormFields,
};

pub fn venues_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_venues))
        .route("/search", post(search_venues))
        .route("/create", get(create_venue_form).post(create_venue))
        .route("/:id", get(get_venue).delete(delete_venue))
        .route("/:id/edit", get(edit_venue_form).post(update_venue))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

#[tracing::instrument(skip(pool, form))]
async fn create_venue(
    State(pool): State<SqlitePool>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, VenueApiError> {
    let command = CreateVenueCommand {
        form: FormFields::from(form),
    };
    let name = command.submitted_name().to_string();

    let response = super::commands::create::handle(pool, command)
        .await
        .map_err(|e| VenueApiError::Create(name, e))?;

    let message = notice::succeeded("Venue", &response.name, Action::Listed);
    Ok(ApiResponse::with_notice(response, message).with_status(StatusCode::CREATED))
}

#[tracing::instrument(skip(pool, form))]
async fn update_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, VenueApiError> {
    let command = UpdateVenueCommand {
        id,
        form: FormFields::from(form),
    };
    let name = command.submitted_name().to_string();

    super::commands::update::handle(pool, command)
        .await
        .map_err(|e| VenueApiError::Update(name, e))?;

    Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, VenueApiError> {
    let response = super::commands::delete::handle(pool, DeleteVenueCommand { id }).await?;

    let message = notice::succeeded("Venue", &response.name, Action::Deleted);
    Ok(ApiResponse::with_notice(response, message).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool))]
async fn list_venues(State(pool): State<SqlitePool>) -> Result<Response, VenueApiError> {
    let areas = super::queries::directory::handle(pool, Utc::now()).await?;
    Ok(ApiResponse::success(areas).into_response())
}

#[tracing::instrument(skip(pool, form))]
async fn search_venues(
    State(pool): State<SqlitePool>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, VenueApiError> {
    let form = FormFields::from(form);
    let query = SearchVenuesQuery {
        search_term: form.get("search_term").unwrap_or_default().to_string(),
    };

    let results = super::queries::search::handle(pool, query, Utc::now()).await?;
    Ok(ApiResponse::success(results).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_venue(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(params): Query<DateFormatQuery>,
) -> Result<Response, VenueApiError> {
    let query = GetVenueQuery {
        id,
        date_format: params.date_format,
    };
    let profile = super::queries::get::handle(pool, query, Utc::now()).await?;
    Ok(ApiResponse::success(profile).into_response())
}

async fn create_venue_form() -> Response {
    ApiResponse::success(VenueForm::schema()).into_response()
}

#[tracing::instrument(skip(pool))]
async fn edit_venue_form(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, VenueApiError> {
    let schema = super::queries::edit_form::handle(pool, id).await?;
    Ok(ApiResponse::success(schema).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for venue endpoints
///
/// Create and update errors carry the submitted name for the notice.
#[derive(Debug)]
enum VenueApiError {
    Create(String, CreateVenueError),
    Update(String, UpdateVenueError),
    Delete(DeleteVenueError),
    Directory(VenueDirectoryError),
    Search(SearchVenuesError),
    Get(GetVenueError),
    EditForm(VenueEditFormError),
}

impl From<DeleteVenueError> for VenueApiError {
    fn from(err: DeleteVenueError) -> Self {
        Self::Delete(err)
    }
}

impl From<VenueDirectoryError> for VenueApiError {
    fn from(err: VenueDirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<SearchVenuesError> for VenueApiError {
    fn from(err: SearchVenuesError) -> Self {
        Self::Search(err)
    }
}

impl From<GetVenueError> for VenueApiError {
    fn from(err: GetVenueError) -> Self {
        Self::Get(err)
    }
}

impl From<VenueEditFormError> for VenueApiError {
    fn from(err: VenueEditFormError) -> Self {
        Self::EditForm(err)
    }
}

fn not_found(id: i64) -> Response {
    ErrorResponse::new("NOT_FOUND", format!("Venue with id {} not found", id))
        .into_response_with(StatusCode::NOT_FOUND)
}

fn internal_error(notice: Option<String>) -> Response {
    let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
    let error = match notice {
        Some(notice) => error.notice(notice),
        None => error,
    };
    error.into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for VenueApiError {
    fn into_response(self) -> Response {
        match self {
            VenueApiError::Create(name, CreateVenueError::Validation(errors)) => {
                ErrorResponse::with_details(
                    "VALIDATION_ERROR",
                    "Venue form is invalid",
                    errors.to_json(),
                )
                .notice(notice::failed("Venue", &name, Action::Listed))
                .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            },
            VenueApiError::Create(name, err @ CreateVenueError::Database { .. }) => {
                tracing::error!(error = %err, "Database error during venue creation");
                internal_error(Some(notice::failed("Venue", &name, Action::Listed)))
            },

            VenueApiError::Update(name, UpdateVenueError::Validation(errors)) => {
                ErrorResponse::with_details(
                    "VALIDATION_ERROR",
                    "Venue form is invalid",
                    errors.to_json(),
                )
                .notice(notice::failed("Venue", &name, Action::Updated))
                .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            },
            VenueApiError::Update(_, UpdateVenueError::NotFound(id)) => not_found(id),
            VenueApiError::Update(name, err @ UpdateVenueError::Database { .. }) => {
                tracing::error!(error = %err, "Database error during venue update");
                internal_error(Some(notice::failed("Venue", &name, Action::Updated)))
            },

            VenueApiError::Delete(DeleteVenueError::NotFound(id)) => not_found(id),
            VenueApiError::Delete(err @ DeleteVenueError::Database { id, .. }) => {
                tracing::error!(venue_id = id, error = %err, "Database error during venue deletion");
                internal_error(Some(notice::failed("Venue", &format!("#{}", id), Action::Deleted)))
            },

            VenueApiError::Get(GetVenueError::NotFound(id))
            | VenueApiError::EditForm(VenueEditFormError::NotFound(id)) => not_found(id),

            VenueApiError::Get(GetVenueError::Database(e))
            | VenueApiError::EditForm(VenueEditFormError::Database(e))
            | VenueApiError::Directory(VenueDirectoryError::Database(e))
            | VenueApiError::Search(SearchVenuesError::Database(e)) => {
                tracing::error!(error = %e, "Database error while reading venues");
                internal_error(None)
            },
        }
    }
}
