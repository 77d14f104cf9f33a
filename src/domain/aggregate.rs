//! Show Aggregator: partitions one entity's shows into past and upcoming.
//!
//! The partition is stable (input order is preserved within each half) and
//! the input is never mutated. Each retained show is enriched with the
//! display fields of its counterpart: the artist when aggregating a
//! venue's shows, the venue when aggregating an artist's. Resolving those
//! counterparts is delegated to a [`CounterpartLookup`] the caller
//! provides; the core holds no storage access of its own.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::ShowId;
use super::records::Show;
use super::timing::{self, ShowTiming};
use crate::error::DirectoryError;

/// Which side of a show the aggregation enriches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterpartSide {
    /// Aggregating a venue's shows: resolve each show's artist.
    Artist,
    /// Aggregating an artist's shows: resolve each show's venue.
    Venue,
}

/// Display fields of a show's counterpart entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterpartDisplay {
    /// Counterpart entity ID (artist or venue, per [`CounterpartSide`]).
    pub id: uuid::Uuid,
    /// Counterpart display name.
    pub name: String,
    /// Counterpart image link, if any.
    pub image_link: Option<String>,
}

/// Resolves a counterpart entity's display fields by ID.
///
/// The service layer backs this with a map prefetched from storage, so
/// the aggregation itself stays synchronous and pure.
pub trait CounterpartLookup {
    /// Returns display fields for the entity with the given ID, or `None`
    /// if the ID does not resolve.
    fn display(&self, id: uuid::Uuid) -> Option<CounterpartDisplay>;
}

impl CounterpartLookup for HashMap<uuid::Uuid, CounterpartDisplay> {
    fn display(&self, id: uuid::Uuid) -> Option<CounterpartDisplay> {
        self.get(&id).cloned()
    }
}

/// One show enriched with its counterpart's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedShow {
    /// Show identifier.
    pub show_id: ShowId,
    /// Scheduled start as stored.
    pub start_time: String,
    /// The resolved counterpart (artist or venue).
    pub counterpart: CounterpartDisplay,
}

/// Past/upcoming partition of one entity's shows.
///
/// `past_count + upcoming_count` always equals the number of input shows;
/// a show starting exactly at `now` lands in `upcoming_shows` (see
/// [`super::timing`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedShows {
    /// Shows that already started, in input order.
    pub past_shows: Vec<EnrichedShow>,
    /// Shows starting at or after `now`, in input order.
    pub upcoming_shows: Vec<EnrichedShow>,
    /// Length of `past_shows`.
    pub past_count: usize,
    /// Length of `upcoming_shows`.
    pub upcoming_count: usize,
}

/// Partitions `shows` into past/upcoming relative to `now`, enriching each
/// with counterpart display fields resolved through `lookup`.
///
/// An empty input is not an error: both partitions come back empty with
/// zero counts.
///
/// # Errors
///
/// - [`DirectoryError::MalformedTimestamp`] if any show's `start_time`
///   does not parse.
/// - [`DirectoryError::MissingCounterpart`] if `lookup` cannot resolve a
///   show's counterpart ID. No placeholder is ever substituted.
pub fn aggregate(
    shows: &[Show],
    side: CounterpartSide,
    lookup: &dyn CounterpartLookup,
    now: DateTime<Utc>,
) -> Result<AggregatedShows, DirectoryError> {
    let mut past_shows = Vec::new();
    let mut upcoming_shows = Vec::new();

    for show in shows {
        let counterpart_id = match side {
            CounterpartSide::Artist => *show.artist_id.as_uuid(),
            CounterpartSide::Venue => *show.venue_id.as_uuid(),
        };
        let counterpart =
            lookup
                .display(counterpart_id)
                .ok_or(DirectoryError::MissingCounterpart {
                    show_id: *show.id.as_uuid(),
                    counterpart_id,
                })?;

        let enriched = EnrichedShow {
            show_id: show.id,
            start_time: show.start_time.clone(),
            counterpart,
        };
        match timing::classify(&show.start_time, now)? {
            ShowTiming::Past => past_shows.push(enriched),
            ShowTiming::Upcoming => upcoming_shows.push(enriched),
        }
    }

    let past_count = past_shows.len();
    let upcoming_count = upcoming_shows.len();
    Ok(AggregatedShows {
        past_shows,
        upcoming_shows,
        past_count,
        upcoming_count,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ids::{ArtistId, VenueId};

    fn now() -> DateTime<Utc> {
        let Ok(dt) = DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z") else {
            panic!("bad fixture timestamp");
        };
        dt.with_timezone(&Utc)
    }

    fn show(artist: ArtistId, start_time: &str) -> Show {
        Show {
            id: ShowId::new(),
            venue_id: VenueId::new(),
            artist_id: artist,
            start_time: start_time.to_string(),
        }
    }

    fn lookup_for(artist: ArtistId, name: &str) -> HashMap<uuid::Uuid, CounterpartDisplay> {
        let mut map = HashMap::new();
        map.insert(
            *artist.as_uuid(),
            CounterpartDisplay {
                id: *artist.as_uuid(),
                name: name.to_string(),
                image_link: None,
            },
        );
        map
    }

    #[test]
    fn partition_is_stable_and_count_preserving() {
        let artist = ArtistId::new();
        let lookup = lookup_for(artist, "Guns N Petals");
        let shows = vec![
            show(artist, "2019-05-21T21:30:00Z"),
            show(artist, "2026-04-01T20:00:00Z"),
            show(artist, "2015-06-15T23:00:00Z"),
            show(artist, "2026-04-08T20:00:00Z"),
            show(artist, "2026-04-15T20:00:00Z"),
        ];

        let Ok(result) = aggregate(&shows, CounterpartSide::Artist, &lookup, now()) else {
            panic!("aggregation failed");
        };
        assert_eq!(result.past_count, 2);
        assert_eq!(result.upcoming_count, 3);
        assert_eq!(result.past_count + result.upcoming_count, shows.len());

        // Relative input order survives within each partition.
        let past_times: Vec<&str> = result
            .past_shows
            .iter()
            .map(|s| s.start_time.as_str())
            .collect();
        assert_eq!(past_times, ["2019-05-21T21:30:00Z", "2015-06-15T23:00:00Z"]);
        let upcoming_times: Vec<&str> = result
            .upcoming_shows
            .iter()
            .map(|s| s.start_time.as_str())
            .collect();
        assert_eq!(
            upcoming_times,
            [
                "2026-04-01T20:00:00Z",
                "2026-04-08T20:00:00Z",
                "2026-04-15T20:00:00Z"
            ]
        );
    }

    #[test]
    fn shows_are_enriched_with_counterpart_fields() {
        let artist = ArtistId::new();
        let lookup = lookup_for(artist, "The Wild Sax Band");
        let shows = vec![show(artist, "2026-04-01T20:00:00Z")];

        let Ok(result) = aggregate(&shows, CounterpartSide::Artist, &lookup, now()) else {
            panic!("aggregation failed");
        };
        let Some(first) = result.upcoming_shows.first() else {
            panic!("expected one upcoming show");
        };
        assert_eq!(first.counterpart.name, "The Wild Sax Band");
        assert_eq!(first.counterpart.id, *artist.as_uuid());
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let lookup: HashMap<uuid::Uuid, CounterpartDisplay> = HashMap::new();
        let Ok(result) = aggregate(&[], CounterpartSide::Venue, &lookup, now()) else {
            panic!("aggregation failed");
        };
        assert!(result.past_shows.is_empty());
        assert!(result.upcoming_shows.is_empty());
        assert_eq!(result.past_count, 0);
        assert_eq!(result.upcoming_count, 0);
    }

    #[test]
    fn unresolvable_counterpart_is_an_error() {
        let lookup: HashMap<uuid::Uuid, CounterpartDisplay> = HashMap::new();
        let shows = vec![show(ArtistId::new(), "2026-04-01T20:00:00Z")];
        let result = aggregate(&shows, CounterpartSide::Artist, &lookup, now());
        assert!(matches!(
            result,
            Err(DirectoryError::MissingCounterpart { .. })
        ));
    }

    #[test]
    fn malformed_start_time_surfaces() {
        let artist = ArtistId::new();
        let lookup = lookup_for(artist, "Matt Quevado");
        let shows = vec![show(artist, "soon")];
        let result = aggregate(&shows, CounterpartSide::Artist, &lookup, now());
        assert!(matches!(
            result,
            Err(DirectoryError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn show_starting_exactly_now_is_upcoming() {
        let artist = ArtistId::new();
        let lookup = lookup_for(artist, "Matt Quevado");
        let shows = vec![show(artist, "2026-01-01T12:00:00Z")];
        let Ok(result) = aggregate(&shows, CounterpartSide::Artist, &lookup, now()) else {
            panic!("aggregation failed");
        };
        assert_eq!(result.upcoming_count, 1);
        assert_eq!(result.past_count, 0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let artist = ArtistId::new();
        let lookup = lookup_for(artist, "Guns N Petals");
        let shows = vec![
            show(artist, "2019-05-21T21:30:00Z"),
            show(artist, "2026-04-01T20:00:00Z"),
        ];
        let first = aggregate(&shows, CounterpartSide::Artist, &lookup, now()).ok();
        let second = aggregate(&shows, CounterpartSide::Artist, &lookup, now()).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
