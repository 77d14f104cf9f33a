//! Entity records consumed by the derivation core.
//!
//! These are plain in-memory snapshots of database rows. The derivation
//! core only ever reads them; every derived structure ([`super::Area`],
//! [`super::AggregatedShows`], [`super::SearchOutcome`]) is freshly
//! constructed per invocation and never written back.

use serde::{Deserialize, Serialize};

use super::ids::{ArtistId, ShowId, VenueId};

/// A venue that hosts shows.
///
/// Carries its associated shows in storage order, the way the store
/// materializes them for a listing or detail request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// Venue identifier.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// State the venue is located in.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Musical genres hosted at the venue.
    pub genres: Vec<String>,
    /// Link to an image of the venue.
    pub image_link: Option<String>,
    /// Venue website.
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Whether the venue is currently looking for artists to book.
    pub seeking_talent: bool,
    /// Free-text pitch shown when `seeking_talent` is set.
    pub seeking_description: Option<String>,
    /// Shows booked at this venue, in storage order.
    pub shows: Vec<Show>,
}

/// A performer who plays shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Artist identifier.
    pub id: ArtistId,
    /// Artist or band name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres the artist performs.
    pub genres: Vec<String>,
    /// Link to an image of the artist.
    pub image_link: Option<String>,
    /// Artist website.
    pub website: Option<String>,
    /// Facebook page link.
    pub facebook_link: Option<String>,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text pitch shown when `seeking_venue` is set.
    pub seeking_description: Option<String>,
    /// Shows this artist plays, in storage order.
    pub shows: Vec<Show>,
}

/// A scheduled performance linking one venue and one artist.
///
/// `start_time` is kept as the stored string. The parseable-string
/// invariant is enforced at the point of use by
/// [`super::timing::parse_start_time`], and at insert time by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Show identifier.
    pub id: ShowId,
    /// Venue hosting the show.
    pub venue_id: VenueId,
    /// Artist playing the show.
    pub artist_id: ArtistId,
    /// Scheduled start as stored (RFC 3339 or `YYYY-MM-DD HH:MM:SS`).
    pub start_time: String,
}
