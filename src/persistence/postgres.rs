//! PostgreSQL implementation of the directory store.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{ArtistRow, ShowRow, VenueRow};
use crate::domain::{Artist, ArtistId, CounterpartDisplay, Show, Venue, VenueId};
use crate::error::DirectoryError;

/// Columns selected for every venue query, in [`VenueRow`] field order.
const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     website, facebook_link, seeking_talent, seeking_description";

/// Columns selected for every artist query, in [`ArtistRow`] field order.
const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     website, facebook_link, seeking_venue, seeking_description";

type VenueTuple = (
    Uuid,
    String,
    String,
    String,
    String,
    Option<String>,
    Vec<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    bool,
    Option<String>,
);

type ArtistTuple = (
    Uuid,
    String,
    String,
    String,
    Option<String>,
    Vec<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    bool,
    Option<String>,
);

type ShowTuple = (Uuid, Uuid, Uuid, String);

fn venue_row(t: VenueTuple) -> VenueRow {
    let (
        id,
        name,
        city,
        state,
        address,
        phone,
        genres,
        image_link,
        website,
        facebook_link,
        seeking_talent,
        seeking_description,
    ) = t;
    VenueRow {
        id,
        name,
        city,
        state,
        address,
        phone,
        genres,
        image_link,
        website,
        facebook_link,
        seeking_talent,
        seeking_description,
    }
}

fn artist_row(t: ArtistTuple) -> ArtistRow {
    let (
        id,
        name,
        city,
        state,
        phone,
        genres,
        image_link,
        website,
        facebook_link,
        seeking_venue,
        seeking_description,
    ) = t;
    ArtistRow {
        id,
        name,
        city,
        state,
        phone,
        genres,
        image_link,
        website,
        facebook_link,
        seeking_venue,
        seeking_description,
    }
}

fn show_row(t: ShowTuple) -> ShowRow {
    let (id, venue_id, artist_id, start_time) = t;
    ShowRow {
        id,
        venue_id,
        artist_id,
        start_time,
    }
}

/// PostgreSQL-backed store for venues, artists, and shows.
///
/// Every read hands back freshly materialized domain records (the
/// per-request snapshot the derivation core runs over). Listing order is
/// insertion order (`created_at`), which is also the order shows carry
/// into the stable partition.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads all venues with their shows stitched in, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn list_venues(&self) -> Result<Vec<Venue>, DirectoryError> {
        let venue_rows = sqlx::query_as::<_, VenueTuple>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        let show_rows = sqlx::query_as::<_, ShowTuple>(
            "SELECT id, venue_id, artist_id, start_time FROM shows ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut shows_by_venue: HashMap<Uuid, Vec<Show>> = HashMap::new();
        for row in show_rows {
            let show = show_row(row).into_show();
            shows_by_venue
                .entry(*show.venue_id.as_uuid())
                .or_default()
                .push(show);
        }

        Ok(venue_rows
            .into_iter()
            .map(|t| {
                let row = venue_row(t);
                let shows = shows_by_venue.remove(&row.id).unwrap_or_default();
                row.into_venue(shows)
            })
            .collect())
    }

    /// Loads all artists with their shows stitched in, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn list_artists(&self) -> Result<Vec<Artist>, DirectoryError> {
        let artist_rows = sqlx::query_as::<_, ArtistTuple>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        let show_rows = sqlx::query_as::<_, ShowTuple>(
            "SELECT id, venue_id, artist_id, start_time FROM shows ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut shows_by_artist: HashMap<Uuid, Vec<Show>> = HashMap::new();
        for row in show_rows {
            let show = show_row(row).into_show();
            shows_by_artist
                .entry(*show.artist_id.as_uuid())
                .or_default()
                .push(show);
        }

        Ok(artist_rows
            .into_iter()
            .map(|t| {
                let row = artist_row(t);
                let shows = shows_by_artist.remove(&row.id).unwrap_or_default();
                row.into_artist(shows)
            })
            .collect())
    }

    /// Loads one venue with its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if no row matches, or
    /// [`DirectoryError::PersistenceError`] on database failure.
    pub async fn get_venue(&self, id: VenueId) -> Result<Venue, DirectoryError> {
        let row = sqlx::query_as::<_, VenueTuple>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DirectoryError::VenueNotFound(*id.as_uuid()))?;

        let shows = sqlx::query_as::<_, ShowTuple>(
            "SELECT id, venue_id, artist_id, start_time FROM shows \
             WHERE venue_id = $1 ORDER BY created_at",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|t| show_row(t).into_show())
        .collect();

        Ok(venue_row(row).into_venue(shows))
    }

    /// Loads one artist with its shows.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if no row matches, or
    /// [`DirectoryError::PersistenceError`] on database failure.
    pub async fn get_artist(&self, id: ArtistId) -> Result<Artist, DirectoryError> {
        let row = sqlx::query_as::<_, ArtistTuple>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DirectoryError::ArtistNotFound(*id.as_uuid()))?;

        let shows = sqlx::query_as::<_, ShowTuple>(
            "SELECT id, venue_id, artist_id, start_time FROM shows \
             WHERE artist_id = $1 ORDER BY created_at",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|t| show_row(t).into_show())
        .collect();

        Ok(artist_row(row).into_artist(shows))
    }

    /// Loads all shows in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn list_shows(&self) -> Result<Vec<Show>, DirectoryError> {
        let rows = sqlx::query_as::<_, ShowTuple>(
            "SELECT id, venue_id, artist_id, start_time FROM shows ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|t| show_row(t).into_show()).collect())
    }

    /// Fetches display fields (id, name, image link) for the given artist
    /// IDs, keyed by ID. IDs with no matching row are simply absent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn artist_displays(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, CounterpartDisplay>, DirectoryError> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>)>(
            "SELECT id, name, image_link FROM artists WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, image_link)| {
                (
                    id,
                    CounterpartDisplay {
                        id,
                        name,
                        image_link,
                    },
                )
            })
            .collect())
    }

    /// Fetches display fields for the given venue IDs, keyed by ID.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn venue_displays(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<Uuid, CounterpartDisplay>, DirectoryError> {
        let rows = sqlx::query_as::<_, (Uuid, String, Option<String>)>(
            "SELECT id, name, image_link FROM venues WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, image_link)| {
                (
                    id,
                    CounterpartDisplay {
                        id,
                        name,
                        image_link,
                    },
                )
            })
            .collect())
    }

    /// Inserts a venue record. The record's `shows` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn insert_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        sqlx::query(
            "INSERT INTO venues (id, name, city, state, address, phone, genres, image_link, \
             website, facebook_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(venue.id.as_uuid())
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.genres)
        .bind(&venue.image_link)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Updates every mutable field of an existing venue.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if no row matches, or
    /// [`DirectoryError::PersistenceError`] on database failure.
    pub async fn update_venue(&self, venue: &Venue) -> Result<(), DirectoryError> {
        let result = sqlx::query(
            "UPDATE venues SET name = $2, city = $3, state = $4, address = $5, phone = $6, \
             genres = $7, image_link = $8, website = $9, facebook_link = $10, \
             seeking_talent = $11, seeking_description = $12 WHERE id = $1",
        )
        .bind(venue.id.as_uuid())
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.genres)
        .bind(&venue.image_link)
        .bind(&venue.website)
        .bind(&venue.facebook_link)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::VenueNotFound(*venue.id.as_uuid()));
        }
        Ok(())
    }

    /// Deletes a venue; its shows go with it via `ON DELETE CASCADE`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::VenueNotFound`] if no row matches, or
    /// [`DirectoryError::PersistenceError`] on database failure.
    pub async fn delete_venue(&self, id: VenueId) -> Result<(), DirectoryError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::VenueNotFound(*id.as_uuid()));
        }
        Ok(())
    }

    /// Inserts an artist record. The record's `shows` field is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn insert_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        sqlx::query(
            "INSERT INTO artists (id, name, city, state, phone, genres, image_link, website, \
             facebook_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(artist.id.as_uuid())
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.image_link)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Updates every mutable field of an existing artist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ArtistNotFound`] if no row matches, or
    /// [`DirectoryError::PersistenceError`] on database failure.
    pub async fn update_artist(&self, artist: &Artist) -> Result<(), DirectoryError> {
        let result = sqlx::query(
            "UPDATE artists SET name = $2, city = $3, state = $4, phone = $5, genres = $6, \
             image_link = $7, website = $8, facebook_link = $9, seeking_venue = $10, \
             seeking_description = $11 WHERE id = $1",
        )
        .bind(artist.id.as_uuid())
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.image_link)
        .bind(&artist.website)
        .bind(&artist.facebook_link)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::ArtistNotFound(*artist.id.as_uuid()));
        }
        Ok(())
    }

    /// Inserts a show row.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure
    /// (including foreign key violations, which the service pre-checks).
    pub async fn insert_show(&self, show: &Show) -> Result<(), DirectoryError> {
        sqlx::query(
            "INSERT INTO shows (id, venue_id, artist_id, start_time) VALUES ($1, $2, $3, $4)",
        )
        .bind(show.id.as_uuid())
        .bind(show.venue_id.as_uuid())
        .bind(show.artist_id.as_uuid())
        .bind(&show.start_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns `true` if a venue row with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn venue_exists(&self, id: VenueId) -> Result<bool, DirectoryError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM venues WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Returns `true` if an artist row with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::PersistenceError`] on database failure.
    pub async fn artist_exists(&self, id: ArtistId) -> Result<bool, DirectoryError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM artists WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
