//! Area Grouper: groups venues by their (city, state) pair.
//!
//! Built in a single pass over the input. Areas come out in first-seen
//! order of their (city, state) key and venues keep their input order
//! within each area, so the result is deterministic for a given input.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::VenueId;
use super::records::Venue;
use super::timing;
use crate::error::DirectoryError;

/// One venue inside an [`Area`], with its derived upcoming-show count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaVenue {
    /// Venue identifier.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Number of this venue's shows classified as upcoming.
    pub num_upcoming_shows: usize,
}

/// A derived grouping of venues sharing a city and state.
///
/// Transient: recomputed on every listing request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    /// Shared city.
    pub city: String,
    /// Shared state.
    pub state: String,
    /// Venues in this area, in input order.
    pub venues: Vec<AreaVenue>,
}

/// Groups `venues` into areas keyed by (city, state).
///
/// Every input venue lands in exactly one area, so the venue counts
/// across all areas sum to `venues.len()`. A venue with no shows gets
/// `num_upcoming_shows = 0`.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] if any venue has a
/// show whose `start_time` does not parse.
pub fn group_areas(venues: &[Venue], now: DateTime<Utc>) -> Result<Vec<Area>, DirectoryError> {
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let entry = AreaVenue {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: timing::count_upcoming(&venue.shows, now)?,
        };

        let key = (venue.city.clone(), venue.state.clone());
        match index.get(&key) {
            Some(&pos) => {
                if let Some(area) = areas.get_mut(pos) {
                    area.venues.push(entry);
                }
            }
            None => {
                index.insert(key, areas.len());
                areas.push(Area {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![entry],
                });
            }
        }
    }

    Ok(areas)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ids::{ArtistId, ShowId};
    use crate::domain::records::Show;

    fn now() -> DateTime<Utc> {
        let Ok(dt) = DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z") else {
            panic!("bad fixture timestamp");
        };
        dt.with_timezone(&Utc)
    }

    fn venue(name: &str, city: &str, state: &str, start_times: &[&str]) -> Venue {
        let id = VenueId::new();
        let shows = start_times
            .iter()
            .map(|t| Show {
                id: ShowId::new(),
                venue_id: id,
                artist_id: ArtistId::new(),
                start_time: (*t).to_string(),
            })
            .collect();
        Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "123 Main St".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            image_link: None,
            website: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            shows,
        }
    }

    #[test]
    fn groups_by_city_state_in_first_seen_order() {
        let venues = vec![
            venue("The Musical Hop", "San Francisco", "CA", &[]),
            venue("The Dueling Pianos Bar", "New York", "NY", &[]),
            venue("Park Square Live Music & Coffee", "San Francisco", "CA", &[]),
        ];

        let Ok(areas) = group_areas(&venues, now()) else {
            panic!("grouping failed");
        };
        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(keys, [("San Francisco", "CA"), ("New York", "NY")]);

        let Some(sf) = areas.first() else {
            panic!("expected San Francisco area");
        };
        let names: Vec<&str> = sf.venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            ["The Musical Hop", "Park Square Live Music & Coffee"]
        );
    }

    #[test]
    fn same_city_different_state_splits() {
        let venues = vec![
            venue("Riverside Hall", "Springfield", "IL", &[]),
            venue("The Cellar", "Springfield", "MA", &[]),
        ];
        let Ok(areas) = group_areas(&venues, now()) else {
            panic!("grouping failed");
        };
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn total_count_is_preserved() {
        let venues = vec![
            venue("A", "San Francisco", "CA", &[]),
            venue("B", "New York", "NY", &[]),
            venue("C", "San Francisco", "CA", &[]),
            venue("D", "Austin", "TX", &[]),
        ];
        let Ok(areas) = group_areas(&venues, now()) else {
            panic!("grouping failed");
        };
        let total: usize = areas.iter().map(|a| a.venues.len()).sum();
        assert_eq!(total, venues.len());
    }

    #[test]
    fn upcoming_counts_use_the_injected_now() {
        let venues = vec![venue(
            "The Musical Hop",
            "San Francisco",
            "CA",
            &[
                "2019-05-21T21:30:00Z",
                "2026-04-01T20:00:00Z",
                "2026-04-08T20:00:00Z",
            ],
        )];
        let Ok(areas) = group_areas(&venues, now()) else {
            panic!("grouping failed");
        };
        let Some(first) = areas.first().and_then(|a| a.venues.first()) else {
            panic!("expected a venue");
        };
        assert_eq!(first.num_upcoming_shows, 2);
    }

    #[test]
    fn venue_with_no_shows_counts_zero() {
        let venues = vec![venue("Empty Stage", "Austin", "TX", &[])];
        let Ok(areas) = group_areas(&venues, now()) else {
            panic!("grouping failed");
        };
        let Some(first) = areas.first().and_then(|a| a.venues.first()) else {
            panic!("expected a venue");
        };
        assert_eq!(first.num_upcoming_shows, 0);
    }

    #[test]
    fn empty_input_yields_no_areas() {
        let Ok(areas) = group_areas(&[], now()) else {
            panic!("grouping failed");
        };
        assert!(areas.is_empty());
    }

    #[test]
    fn malformed_show_timestamp_surfaces() {
        let venues = vec![venue("Broken Clock", "Austin", "TX", &["whenever"])];
        let result = group_areas(&venues, now());
        assert!(matches!(
            result,
            Err(DirectoryError::MalformedTimestamp { .. })
        ));
    }
}
