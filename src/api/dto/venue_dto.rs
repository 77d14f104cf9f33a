//! Venue-related DTOs for listing, detail, search, and mutations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Area, Venue, VenueId};
use crate::service::VenueDetail;

use super::show_dto::VenueShowDto;

/// Request body for `POST /venues` and `PUT /venues/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VenuePayload {
    /// Venue name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Genres hosted at the venue.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Image link.
    #[serde(default)]
    pub image_link: Option<String>,
    /// Website link.
    #[serde(default)]
    pub website: Option<String>,
    /// Facebook link.
    #[serde(default)]
    pub facebook_link: Option<String>,
    /// Whether the venue is looking for artists to book.
    #[serde(default)]
    pub seeking_talent: bool,
    /// Free-text pitch shown when `seeking_talent` is set.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenuePayload {
    /// Builds a domain record carrying this payload under the given ID.
    #[must_use]
    pub fn into_venue(self, id: VenueId) -> Venue {
        Venue {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            website: self.website,
            facebook_link: self.facebook_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
            shows: Vec::new(),
        }
    }
}

/// A stored venue record as echoed by create/update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueRecordDto {
    /// Venue identifier.
    pub id: uuid::Uuid,
    /// Venue name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres hosted at the venue.
    pub genres: Vec<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Website link.
    pub website: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl From<Venue> for VenueRecordDto {
    fn from(venue: Venue) -> Self {
        Self {
            id: *venue.id.as_uuid(),
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            image_link: venue.image_link,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

/// One venue inside an area listing entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AreaVenueDto {
    /// Venue identifier.
    pub id: uuid::Uuid,
    /// Venue name.
    pub name: String,
    /// Number of the venue's upcoming shows.
    pub num_upcoming_shows: usize,
}

/// One (city, state) group in the venues listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AreaDto {
    /// Shared city.
    pub city: String,
    /// Shared state.
    pub state: String,
    /// Venues in this area, in storage order.
    pub venues: Vec<AreaVenueDto>,
}

impl From<Area> for AreaDto {
    fn from(area: Area) -> Self {
        Self {
            city: area.city,
            state: area.state,
            venues: area
                .venues
                .into_iter()
                .map(|v| AreaVenueDto {
                    id: *v.id.as_uuid(),
                    name: v.name,
                    num_upcoming_shows: v.num_upcoming_shows,
                })
                .collect(),
        }
    }
}

/// Response body for `GET /venues/{id}`: the record plus its partitioned
/// shows and counts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VenueDetailResponse {
    /// Venue identifier.
    pub id: uuid::Uuid,
    /// Venue name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres hosted at the venue.
    pub genres: Vec<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Website link.
    pub website: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Seeking-talent flag.
    pub seeking_talent: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Shows that already started, in storage order.
    pub past_shows: Vec<VenueShowDto>,
    /// Shows starting at or after the request instant, in storage order.
    pub upcoming_shows: Vec<VenueShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailResponse {
    fn from(detail: VenueDetail) -> Self {
        let VenueDetail { venue, shows } = detail;
        Self {
            id: *venue.id.as_uuid(),
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            image_link: venue.image_link,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows: shows.past_shows.into_iter().map(VenueShowDto::from).collect(),
            upcoming_shows: shows
                .upcoming_shows
                .into_iter()
                .map(VenueShowDto::from)
                .collect(),
            past_shows_count: shows.past_count,
            upcoming_shows_count: shows.upcoming_count,
        }
    }
}
