//! Artist-related DTOs for listing, detail, search, and mutations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Artist, ArtistId};
use crate::service::ArtistDetail;

use super::show_dto::ArtistShowDto;

/// Request body for `POST /artists` and `PUT /artists/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArtistPayload {
    /// Artist or band name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Genres the artist performs.
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
    /// Whether the artist is looking for venues to play.
    #[serde(default)]
    pub seeking_venue: bool,
    /// Free-text pitch shown when `seeking_venue` is set.
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistPayload {
    /// Builds a domain record carrying this payload under the given ID.
    #[must_use]
    pub fn into_artist(self, id: ArtistId) -> Artist {
        Artist {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            website: self.website,
            facebook_link: self.facebook_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
            shows: Vec::new(),
        }
    }
}

/// A stored artist record as echoed by create/update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistRecordDto {
    /// Artist identifier.
    pub id: uuid::Uuid,
    /// Artist name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres performed.
    pub genres: Vec<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Website link.
    pub website: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
}

impl From<Artist> for ArtistRecordDto {
    fn from(artist: Artist) -> Self {
        Self {
            id: *artist.id.as_uuid(),
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

/// One entry of the flat artists listing (`GET /artists`).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistSummaryDto {
    /// Artist identifier.
    pub id: uuid::Uuid,
    /// Artist name.
    pub name: String,
}

impl From<&Artist> for ArtistSummaryDto {
    fn from(artist: &Artist) -> Self {
        Self {
            id: *artist.id.as_uuid(),
            name: artist.name.clone(),
        }
    }
}

/// Response body for `GET /artists/{id}`: the record plus its partitioned
/// shows and counts.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    /// Artist identifier.
    pub id: uuid::Uuid,
    /// Artist name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres performed.
    pub genres: Vec<String>,
    /// Image link.
    pub image_link: Option<String>,
    /// Website link.
    pub website: Option<String>,
    /// Facebook link.
    pub facebook_link: Option<String>,
    /// Seeking-venue flag.
    pub seeking_venue: bool,
    /// Seeking description.
    pub seeking_description: Option<String>,
    /// Shows that already started, in storage order.
    pub past_shows: Vec<ArtistShowDto>,
    /// Shows starting at or after the request instant, in storage order.
    pub upcoming_shows: Vec<ArtistShowDto>,
    /// Length of `past_shows`.
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailResponse {
    fn from(detail: ArtistDetail) -> Self {
        let ArtistDetail { artist, shows } = detail;
        Self {
            id: *artist.id.as_uuid(),
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows: shows
                .past_shows
                .into_iter()
                .map(ArtistShowDto::from)
                .collect(),
            upcoming_shows: shows
                .upcoming_shows
                .into_iter()
                .map(ArtistShowDto::from)
                .collect(),
            past_shows_count: shows.past_count,
            upcoming_shows_count: shows.upcoming_count,
        }
    }
}
