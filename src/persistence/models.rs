//! Database row types and their conversions into domain records.
//!
//! Rows are fetched as typed tuples and mapped through these structs;
//! associated shows are stitched in by the store before a row becomes a
//! full [`Venue`]/[`Artist`] record.

use uuid::Uuid;

use crate::domain::{Artist, ArtistId, Show, ShowId, Venue, VenueId};

/// A venue row from the `venues` table, without its shows.
#[derive(Debug, Clone)]
pub struct VenueRow {
    /// Primary key.
    pub id: Uuid,
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
    /// Genres hosted, stored as a `TEXT[]` column.
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

impl VenueRow {
    /// Builds a domain [`Venue`] from this row plus its shows in storage
    /// order.
    #[must_use]
    pub fn into_venue(self, shows: Vec<Show>) -> Venue {
        Venue {
            id: VenueId::from_uuid(self.id),
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
            shows,
        }
    }
}

/// An artist row from the `artists` table, without its shows.
#[derive(Debug, Clone)]
pub struct ArtistRow {
    /// Primary key.
    pub id: Uuid,
    /// Artist name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Genres performed, stored as a `TEXT[]` column.
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

impl ArtistRow {
    /// Builds a domain [`Artist`] from this row plus its shows in storage
    /// order.
    #[must_use]
    pub fn into_artist(self, shows: Vec<Show>) -> Artist {
        Artist {
            id: ArtistId::from_uuid(self.id),
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
            shows,
        }
    }
}

/// A show row from the `shows` table.
#[derive(Debug, Clone)]
pub struct ShowRow {
    /// Primary key.
    pub id: Uuid,
    /// Venue foreign key.
    pub venue_id: Uuid,
    /// Artist foreign key.
    pub artist_id: Uuid,
    /// Start time as stored.
    pub start_time: String,
}

impl ShowRow {
    /// Converts this row into a domain [`Show`].
    #[must_use]
    pub fn into_show(self) -> Show {
        Show {
            id: ShowId::from_uuid(self.id),
            venue_id: VenueId::from_uuid(self.venue_id),
            artist_id: ArtistId::from_uuid(self.artist_id),
            start_time: self.start_time,
        }
    }
}
