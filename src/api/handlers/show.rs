//! Show handlers: global listing and creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateShowRequest, ShowListingDto, ShowResponse};
use crate::app_state::AppState;
use crate::domain::{ArtistId, VenueId};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /shows` — All shows with venue and artist display fields.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure or a dangling reference.
#[utoipa::path(
    get,
    path = "/api/v1/shows",
    tag = "Shows",
    summary = "List shows",
    description = "Returns every show in insertion order, enriched with the venue name and the artist name and image.",
    responses(
        (status = 200, description = "Show listing", body = Vec<ShowListingDto>),
    )
)]
pub async fn list_shows(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let listings = state.directory.list_shows().await?;
    let response: Vec<ShowListingDto> = listings.into_iter().map(ShowListingDto::from).collect();
    Ok(Json(response))
}

/// `POST /shows` — Create a show.
///
/// # Errors
///
/// Returns [`DirectoryError::MalformedTimestamp`] for an unparseable
/// start time and a not-found error for a dangling venue or artist
/// reference.
#[utoipa::path(
    post,
    path = "/api/v1/shows",
    tag = "Shows",
    summary = "Create a show",
    description = "Books an artist at a venue. The start time must parse (RFC 3339 or `YYYY-MM-DD HH:MM:SS`) and both references must exist.",
    request_body = CreateShowRequest,
    responses(
        (status = 201, description = "Show created", body = ShowResponse),
        (status = 404, description = "Venue or artist not found", body = ErrorResponse),
        (status = 422, description = "Malformed start time", body = ErrorResponse),
    )
)]
pub async fn create_show(
    State(state): State<AppState>,
    Json(req): Json<CreateShowRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let show = state
        .directory
        .create_show(
            VenueId::from_uuid(req.venue_id),
            ArtistId::from_uuid(req.artist_id),
            req.start_time,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ShowResponse::from(show))))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/shows", get(list_shows).post(create_show))
}
