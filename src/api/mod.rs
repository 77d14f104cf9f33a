//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; health and (when
//! enabled) Swagger UI live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the directory API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "marquee",
        description = "REST API for a venue, artist, and show booking directory"
    ),
    paths(
        handlers::venue::list_venues,
        handlers::venue::search_venues,
        handlers::venue::get_venue,
        handlers::venue::create_venue,
        handlers::venue::update_venue,
        handlers::venue::delete_venue,
        handlers::artist::list_artists,
        handlers::artist::search_artists,
        handlers::artist::get_artist,
        handlers::artist::create_artist,
        handlers::artist::update_artist,
        handlers::show::list_shows,
        handlers::show::create_show,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::AreaDto,
        dto::AreaVenueDto,
        dto::VenuePayload,
        dto::VenueRecordDto,
        dto::VenueDetailResponse,
        dto::VenueShowDto,
        dto::ArtistPayload,
        dto::ArtistRecordDto,
        dto::ArtistSummaryDto,
        dto::ArtistDetailResponse,
        dto::ArtistShowDto,
        dto::SearchHitDto,
        dto::SearchResponse,
        dto::CreateShowRequest,
        dto::ShowResponse,
        dto::ShowListingDto,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Venues", description = "Venue listing, search, and management"),
        (name = "Artists", description = "Artist listing, search, and management"),
        (name = "Shows", description = "Show listing and booking"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
