//! Directory service: orchestrates store reads and the derivation core.
//!
//! Every page-shaped read follows the same pattern: snapshot the rows
//! from the store, run the pure derivation with the caller-supplied
//! `now`, return the view structure. The clock is never read here; the
//! HTTP layer injects it so derivations stay deterministic under test.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    aggregate, areas, search, Area, AggregatedShows, Artist, ArtistId, CounterpartSide,
    SearchOutcome, Show, ShowId, Venue, VenueId,
};
use crate::error::DirectoryError;
use crate::persistence::postgres::PostgresStore;

/// A venue detail page: the record plus its partitioned shows.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    /// The venue record.
    pub venue: Venue,
    /// Past/upcoming partition of the venue's shows, enriched with each
    /// show's artist.
    pub shows: AggregatedShows,
}

/// An artist detail page: the record plus its partitioned shows.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    /// The artist record.
    pub artist: Artist,
    /// Past/upcoming partition of the artist's shows, enriched with each
    /// show's venue.
    pub shows: AggregatedShows,
}

/// One row of the global shows listing, enriched with both counterparts.
#[derive(Debug, Clone, Serialize)]
pub struct ShowListing {
    /// Venue hosting the show.
    pub venue_id: VenueId,
    /// Venue name.
    pub venue_name: String,
    /// Artist playing the show.
    pub artist_id: ArtistId,
    /// Artist name.
    pub artist_name: String,
    /// Artist image link, if any.
    pub artist_image_link: Option<String>,
    /// Scheduled start as stored.
    pub start_time: String,
}

/// Orchestration layer for all directory operations.
///
/// Stateless coordinator over [`PostgresStore`]; reads take a snapshot,
/// mutations validate then write and echo the stored record back.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    store: PostgresStore,
}

impl DirectoryService {
    /// Creates a new `DirectoryService`.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        Self { store }
    }

    /// Venues listing: all venues grouped into (city, state) areas with
    /// upcoming-show counts, relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on storage failure or a malformed
    /// stored timestamp.
    pub async fn venue_areas(&self, now: DateTime<Utc>) -> Result<Vec<Area>, DirectoryError> {
        let venues = self.store.list_venues().await?;
        areas::group_areas(&venues, now)
    }

    /// Venue detail: the record plus its shows partitioned around `now`,
    /// each enriched with its artist's display fields.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] for an unknown ID, plus
    /// derivation and storage errors.
    pub async fn venue_detail(
        &self,
        id: VenueId,
        now: DateTime<Utc>,
    ) -> Result<VenueDetail, DirectoryError> {
        let venue = self.store.get_venue(id).await?;
        let artist_ids: Vec<Uuid> = venue.shows.iter().map(|s| *s.artist_id.as_uuid()).collect();
        let lookup = self.store.artist_displays(&artist_ids).await?;
        let shows = aggregate::aggregate(&venue.shows, CounterpartSide::Artist, &lookup, now)?;
        Ok(VenueDetail { venue, shows })
    }

    /// Artist detail: the record plus its shows partitioned around `now`,
    /// each enriched with its venue's display fields.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] for an unknown ID, plus
    /// derivation and storage errors.
    pub async fn artist_detail(
        &self,
        id: ArtistId,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetail, DirectoryError> {
        let artist = self.store.get_artist(id).await?;
        let venue_ids: Vec<Uuid> = artist.shows.iter().map(|s| *s.venue_id.as_uuid()).collect();
        let lookup = self.store.venue_displays(&venue_ids).await?;
        let shows = aggregate::aggregate(&artist.shows, CounterpartSide::Venue, &lookup, now)?;
        Ok(ArtistDetail { artist, shows })
    }

    /// Flat artist listing in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on storage failure.
    pub async fn list_artists(&self) -> Result<Vec<Artist>, DirectoryError> {
        self.store.list_artists().await
    }

    /// Case-insensitive venue search by name.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on storage failure or a malformed
    /// stored timestamp.
    pub async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchOutcome, DirectoryError> {
        let venues = self.store.list_venues().await?;
        search::search(&venues, term, now)
    }

    /// Case-insensitive artist search by name.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] on storage failure or a malformed
    /// stored timestamp.
    pub async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchOutcome, DirectoryError> {
        let artists = self.store.list_artists().await?;
        search::search(&artists, term, now)
    }

    /// Global shows listing enriched with venue and artist display fields.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MissingCounterpart`] if a show references
    /// a missing row, plus storage errors.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, DirectoryError> {
        let shows = self.store.list_shows().await?;

        let venue_ids: Vec<Uuid> = shows.iter().map(|s| *s.venue_id.as_uuid()).collect();
        let artist_ids: Vec<Uuid> = shows.iter().map(|s| *s.artist_id.as_uuid()).collect();
        let venues = self.store.venue_displays(&venue_ids).await?;
        let artists = self.store.artist_displays(&artist_ids).await?;

        let mut listings = Vec::with_capacity(shows.len());
        for show in shows {
            let venue = venues.get(show.venue_id.as_uuid()).ok_or(
                DirectoryError::MissingCounterpart {
                    show_id: *show.id.as_uuid(),
                    counterpart_id: *show.venue_id.as_uuid(),
                },
            )?;
            let artist = artists.get(show.artist_id.as_uuid()).ok_or(
                DirectoryError::MissingCounterpart {
                    show_id: *show.id.as_uuid(),
                    counterpart_id: *show.artist_id.as_uuid(),
                },
            )?;
            listings.push(ShowListing {
                venue_id: show.venue_id,
                venue_name: venue.name.clone(),
                artist_id: show.artist_id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: show.start_time,
            });
        }
        Ok(listings)
    }

    /// Creates a venue and echoes the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidRequest`] on an empty name, plus
    /// storage errors.
    pub async fn create_venue(&self, venue: Venue) -> Result<Venue, DirectoryError> {
        validate_name(&venue.name)?;
        self.store.insert_venue(&venue).await?;
        tracing::info!(venue_id = %venue.id, name = %venue.name, "venue created");
        Ok(venue)
    }

    /// Updates a venue and echoes the stored record with its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] for an unknown ID,
    /// [`DirectoryError::InvalidRequest`] on an empty name, plus storage
    /// errors.
    pub async fn update_venue(&self, venue: Venue) -> Result<Venue, DirectoryError> {
        validate_name(&venue.name)?;
        self.store.update_venue(&venue).await?;
        tracing::info!(venue_id = %venue.id, "venue updated");
        self.store.get_venue(venue.id).await
    }

    /// Deletes a venue and its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] for an unknown ID, plus
    /// storage errors.
    pub async fn delete_venue(&self, id: VenueId) -> Result<(), DirectoryError> {
        self.store.delete_venue(id).await?;
        tracing::info!(venue_id = %id, "venue deleted");
        Ok(())
    }

    /// Creates an artist and echoes the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidRequest`] on an empty name, plus
    /// storage errors.
    pub async fn create_artist(&self, artist: Artist) -> Result<Artist, DirectoryError> {
        validate_name(&artist.name)?;
        self.store.insert_artist(&artist).await?;
        tracing::info!(artist_id = %artist.id, name = %artist.name, "artist created");
        Ok(artist)
    }

    /// Updates an artist and echoes the stored record with its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] for an unknown ID,
    /// [`DirectoryError::InvalidRequest`] on an empty name, plus storage
    /// errors.
    pub async fn update_artist(&self, artist: Artist) -> Result<Artist, DirectoryError> {
        validate_name(&artist.name)?;
        self.store.update_artist(&artist).await?;
        tracing::info!(artist_id = %artist.id, "artist updated");
        self.store.get_artist(artist.id).await
    }

    /// Creates a show after validating its timestamp and both references.
    ///
    /// The parseable-string invariant is enforced here so a malformed
    /// `start_time` is rejected at the boundary instead of poisoning
    /// every later derivation over the row.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MalformedTimestamp`] for an unparseable
    /// start time, [`DirectoryError::VenueNotFound`] /
    /// [`DirectoryError::ArtistNotFound`] for dangling references, plus
    /// storage errors.
    pub async fn create_show(
        &self,
        venue_id: VenueId,
        artist_id: ArtistId,
        start_time: String,
    ) -> Result<Show, DirectoryError> {
        crate::domain::timing::parse_start_time(&start_time)?;

        if !self.store.venue_exists(venue_id).await? {
            return Err(DirectoryError::VenueNotFound(*venue_id.as_uuid()));
        }
        if !self.store.artist_exists(artist_id).await? {
            return Err(DirectoryError::ArtistNotFound(*artist_id.as_uuid()));
        }

        let show = Show {
            id: ShowId::new(),
            venue_id,
            artist_id,
            start_time,
        };
        self.store.insert_show(&show).await?;
        tracing::info!(show_id = %show.id, venue_id = %venue_id, artist_id = %artist_id, "show created");
        Ok(show)
    }
}

/// Rejects blank names before they reach storage.
fn validate_name(name: &str) -> Result<(), DirectoryError> {
    if name.trim().is_empty() {
        return Err(DirectoryError::InvalidRequest(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(validate_name("The Musical Hop").is_ok());
        assert!(matches!(
            validate_name("   "),
            Err(DirectoryError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_name(""),
            Err(DirectoryError::InvalidRequest(_))
        ));
    }
}
