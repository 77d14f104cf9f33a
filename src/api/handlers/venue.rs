//! Venue handlers: areas listing, detail, search, create, update, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{
    AreaDto, SearchParams, SearchResponse, VenueDetailResponse, VenuePayload, VenueRecordDto,
};
use crate::app_state::AppState;
use crate::domain::VenueId;
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /venues` — Venues grouped into (city, state) areas.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure or a malformed stored
/// timestamp.
#[utoipa::path(
    get,
    path = "/api/v1/venues",
    tag = "Venues",
    summary = "List venues grouped by area",
    description = "Returns all venues grouped by (city, state), each venue carrying its upcoming-show count. Areas appear in first-seen order.",
    responses(
        (status = 200, description = "Area listing", body = Vec<AreaDto>),
        (status = 422, description = "A stored start_time failed to parse", body = ErrorResponse),
    )
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let areas = state.directory.venue_areas(Utc::now()).await?;
    let response: Vec<AreaDto> = areas.into_iter().map(AreaDto::from).collect();
    Ok(Json(response))
}

/// `GET /venues/search` — Case-insensitive venue search by name.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure or a malformed stored
/// timestamp.
#[utoipa::path(
    get,
    path = "/api/v1/venues/search",
    tag = "Venues",
    summary = "Search venues",
    description = "Case-insensitive substring match over venue names. An empty term matches every venue.",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, DirectoryError> {
    let outcome = state
        .directory
        .search_venues(&params.term, Utc::now())
        .await?;
    Ok(Json(SearchResponse::from(outcome)))
}

/// `GET /venues/{id}` — Venue detail with past/upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}",
    tag = "Venues",
    summary = "Get venue details",
    description = "Returns the venue record plus its shows partitioned into past and upcoming, each enriched with the artist's name and image.",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 200, description = "Venue detail", body = VenueDetailResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state
        .directory
        .venue_detail(VenueId::from_uuid(id), Utc::now())
        .await?;
    Ok(Json(VenueDetailResponse::from(detail)))
}

/// `POST /venues` — Create a venue.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidRequest`] on validation failure.
#[utoipa::path(
    post,
    path = "/api/v1/venues",
    tag = "Venues",
    summary = "Create a venue",
    request_body = VenuePayload,
    responses(
        (status = 201, description = "Venue created", body = VenueRecordDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_venue(
    State(state): State<AppState>,
    Json(payload): Json<VenuePayload>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = payload.into_venue(VenueId::new());
    let stored = state.directory.create_venue(venue).await?;
    Ok((StatusCode::CREATED, Json(VenueRecordDto::from(stored))))
}

/// `PUT /venues/{id}` — Update a venue.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/venues/{id}",
    tag = "Venues",
    summary = "Update a venue",
    request_body = VenuePayload,
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 200, description = "Venue updated", body = VenueRecordDto),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(payload): Json<VenuePayload>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = payload.into_venue(VenueId::from_uuid(id));
    let stored = state.directory.update_venue(venue).await?;
    Ok(Json(VenueRecordDto::from(stored)))
}

/// `DELETE /venues/{id}` — Delete a venue and its shows.
///
/// # Errors
///
/// Returns [`DirectoryError::VenueNotFound`] if the venue does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    description = "Removes the venue; its shows are removed with it.",
    params(
        ("id" = uuid::Uuid, Path, description = "Venue UUID"),
    ),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, DirectoryError> {
    state.directory.delete_venue(VenueId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues).post(create_venue))
        .route("/venues/search", get(search_venues))
        .route(
            "/venues/{id}",
            get(get_venue).put(update_venue).delete(delete_venue),
        )
}
