//! Show-related DTOs: global listing, per-entity show entries, creation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::aggregate::EnrichedShow;
use crate::domain::Show;
use crate::service::ShowListing;

/// Request body for `POST /shows`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShowRequest {
    /// Venue hosting the show.
    pub venue_id: uuid::Uuid,
    /// Artist playing the show.
    pub artist_id: uuid::Uuid,
    /// Scheduled start (RFC 3339 or `YYYY-MM-DD HH:MM:SS`, stored as
    /// supplied).
    pub start_time: String,
}

/// Response body for `POST /shows` (201 Created).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowResponse {
    /// Show identifier.
    pub id: uuid::Uuid,
    /// Venue hosting the show.
    pub venue_id: uuid::Uuid,
    /// Artist playing the show.
    pub artist_id: uuid::Uuid,
    /// Scheduled start as stored.
    pub start_time: String,
}

impl From<Show> for ShowResponse {
    fn from(show: Show) -> Self {
        Self {
            id: *show.id.as_uuid(),
            venue_id: *show.venue_id.as_uuid(),
            artist_id: *show.artist_id.as_uuid(),
            start_time: show.start_time,
        }
    }
}

/// One entry of the global shows listing (`GET /shows`).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowListingDto {
    /// Venue hosting the show.
    pub venue_id: uuid::Uuid,
    /// Venue name.
    pub venue_name: String,
    /// Artist playing the show.
    pub artist_id: uuid::Uuid,
    /// Artist name.
    pub artist_name: String,
    /// Artist image link, if any.
    pub artist_image_link: Option<String>,
    /// Scheduled start as stored.
    pub start_time: String,
}

impl From<ShowListing> for ShowListingDto {
    fn from(listing: ShowListing) -> Self {
        Self {
            venue_id: *listing.venue_id.as_uuid(),
            venue_name: listing.venue_name,
            artist_id: *listing.artist_id.as_uuid(),
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time: listing.start_time,
        }
    }
}

/// One show on a venue detail page, enriched with its artist.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueShowDto {
    /// Show identifier.
    pub id: uuid::Uuid,
    /// Artist playing the show.
    pub artist_id: uuid::Uuid,
    /// Artist name.
    pub artist_name: String,
    /// Artist image link, if any.
    pub artist_image_link: Option<String>,
    /// Scheduled start as stored.
    pub start_time: String,
}

impl From<EnrichedShow> for VenueShowDto {
    fn from(show: EnrichedShow) -> Self {
        Self {
            id: *show.show_id.as_uuid(),
            artist_id: show.counterpart.id,
            artist_name: show.counterpart.name,
            artist_image_link: show.counterpart.image_link,
            start_time: show.start_time,
        }
    }
}

/// One show on an artist detail page, enriched with its venue.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistShowDto {
    /// Show identifier.
    pub id: uuid::Uuid,
    /// Venue hosting the show.
    pub venue_id: uuid::Uuid,
    /// Venue name.
    pub venue_name: String,
    /// Venue image link, if any.
    pub venue_image_link: Option<String>,
    /// Scheduled start as stored.
    pub start_time: String,
}

impl From<EnrichedShow> for ArtistShowDto {
    fn from(show: EnrichedShow) -> Self {
        Self {
            id: *show.show_id.as_uuid(),
            venue_id: show.counterpart.id,
            venue_name: show.counterpart.name,
            venue_image_link: show.counterpart.image_link,
            start_time: show.start_time,
        }
    }
}
