//! Artist handlers: listing, detail, search, create, update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{
    ArtistDetailResponse, ArtistPayload, ArtistRecordDto, ArtistSummaryDto, SearchParams,
    SearchResponse,
};
use crate::app_state::AppState;
use crate::domain::ArtistId;
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /artists` — Flat artist listing.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/artists",
    tag = "Artists",
    summary = "List artists",
    description = "Returns all artists as id/name pairs in insertion order.",
    responses(
        (status = 200, description = "Artist listing", body = Vec<ArtistSummaryDto>),
    )
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artists = state.directory.list_artists().await?;
    let response: Vec<ArtistSummaryDto> = artists.iter().map(ArtistSummaryDto::from).collect();
    Ok(Json(response))
}

/// `GET /artists/search` — Case-insensitive artist search by name.
///
/// # Errors
///
/// Returns [`DirectoryError`] on storage failure or a malformed stored
/// timestamp.
#[utoipa::path(
    get,
    path = "/api/v1/artists/search",
    tag = "Artists",
    summary = "Search artists",
    description = "Case-insensitive substring match over artist names. An empty term matches every artist.",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, DirectoryError> {
    let outcome = state
        .directory
        .search_artists(&params.term, Utc::now())
        .await?;
    Ok(Json(SearchResponse::from(outcome)))
}

/// `GET /artists/{id}` — Artist detail with past/upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    tag = "Artists",
    summary = "Get artist details",
    description = "Returns the artist record plus its shows partitioned into past and upcoming, each enriched with the venue's name and image.",
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    responses(
        (status = 200, description = "Artist detail", body = ArtistDetailResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state
        .directory
        .artist_detail(ArtistId::from_uuid(id), Utc::now())
        .await?;
    Ok(Json(ArtistDetailResponse::from(detail)))
}

/// `POST /artists` — Create an artist.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidRequest`] on validation failure.
#[utoipa::path(
    post,
    path = "/api/v1/artists",
    tag = "Artists",
    summary = "Create an artist",
    request_body = ArtistPayload,
    responses(
        (status = 201, description = "Artist created", body = ArtistRecordDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = payload.into_artist(ArtistId::new());
    let stored = state.directory.create_artist(artist).await?;
    Ok((StatusCode::CREATED, Json(ArtistRecordDto::from(stored))))
}

/// `PUT /artists/{id}` — Update an artist.
///
/// # Errors
///
/// Returns [`DirectoryError::ArtistNotFound`] if the artist does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/artists/{id}",
    tag = "Artists",
    summary = "Update an artist",
    request_body = ArtistPayload,
    params(
        ("id" = uuid::Uuid, Path, description = "Artist UUID"),
    ),
    responses(
        (status = 200, description = "Artist updated", body = ArtistRecordDto),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(payload): Json<ArtistPayload>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = payload.into_artist(ArtistId::from_uuid(id));
    let stored = state.directory.update_artist(artist).await?;
    Ok(Json(ArtistRecordDto::from(stored)))
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/search", get(search_artists))
        .route("/artists/{id}", get(get_artist).put(update_artist))
}
