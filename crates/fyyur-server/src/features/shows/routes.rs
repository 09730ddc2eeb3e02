//! Show routes
//!
//! - `GET /shows` - Every show as a display record
//! - `GET /shows/create` - Show form with `start_time` defaulting to now
//! - `POST /shows/create` - Create a show

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use chrono::Utc;
use sqlx::SqlitePool;

use super::{
    commands::{CreateShowCommand, CreateShowError},
    form::ShowForm,
    queries::ListShowsError,
};
use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::shared::{
    notice::{self, Action},
    DateFormatQuery, FormFields,
};

pub fn shows_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_shows))
        .route("/create", get(create_show_form).post(create_show))
}

#[tracing::instrument(skip(pool, form))]
async fn create_show(
    State(pool): State<SqlitePool>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Response, ShowApiError> {
    let command = CreateShowCommand {
        form: FormFields::from(form),
    };
    let response = super::commands::create::handle(pool, command).await?;

    let message = notice::succeeded("Show", "", Action::Listed);
    Ok(ApiResponse::with_notice(response, message).with_status(StatusCode::CREATED))
}

#[tracing::instrument(skip(pool))]
async fn list_shows(
    State(pool): State<SqlitePool>,
    Query(params): Query<DateFormatQuery>,
) -> Result<Response, ShowApiError> {
    let shows = super::queries::list::handle(pool, params.date_format).await?;
    Ok(ApiResponse::success(shows).into_response())
}

async fn create_show_form() -> Response {
    ApiResponse::success(ShowForm::schema(Utc::now())).into_response()
}

#[derive(Debug)]
enum ShowApiError {
    Create(CreateShowError),
    List(ListShowsError),
}

impl From<CreateShowError> for ShowApiError {
    fn from(err: CreateShowError) -> Self {
        Self::Create(err)
    }
}

impl From<ListShowsError> for ShowApiError {
    fn from(err: ListShowsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for ShowApiError {
    fn into_response(self) -> Response {
        let failed = notice::failed("Show", "", Action::Listed);

        match self {
            ShowApiError::Create(CreateShowError::Validation(errors)) => {
                ErrorResponse::with_details("VALIDATION_ERROR", "Show form is invalid", errors.to_json())
                    .notice(failed)
                    .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            },
            ShowApiError::Create(err) if err.is_referent_missing() => {
                tracing::warn!(error = %err, "Show submitted for a missing artist or venue");
                ErrorResponse::new("INVALID_REFERENCE", err.to_string())
                    .notice(failed)
                    .into_response_with(StatusCode::BAD_REQUEST)
            },
            ShowApiError::Create(err) => {
                tracing::error!(error = %err, "Database error during show creation");
                ErrorResponse::new("INTERNAL_ERROR", "A database error occurred")
                    .notice(failed)
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },
            ShowApiError::List(ListShowsError::Database(e)) => {
                tracing::error!(error = %e, "Database error while listing shows");
                ErrorResponse::new("INTERNAL_ERROR", "A database error occurred")
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },
        }
    }
}
