//! Search Matcher: case-insensitive substring filter over entity names.
//!
//! Works over anything [`Searchable`], so venues and artists share one
//! implementation. Case folding uses `str::to_lowercase`, which is
//! locale-independent. The reported `count` is always the true number of
//! returned hits.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::records::{Artist, Venue};
use super::timing;
use crate::error::DirectoryError;

/// An entity the Search Matcher can filter: anything with an ID, a name,
/// and an associated show list for the upcoming-count enrichment.
pub trait Searchable {
    /// Entity identifier.
    fn id(&self) -> uuid::Uuid;
    /// Name field the substring match runs against.
    fn name(&self) -> &str;
    /// Shows used to derive `num_upcoming_shows`.
    fn shows(&self) -> &[super::records::Show];
}

impl Searchable for Venue {
    fn id(&self) -> uuid::Uuid {
        *self.id.as_uuid()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn shows(&self) -> &[super::records::Show] {
        &self.shows
    }
}

impl Searchable for Artist {
    fn id(&self) -> uuid::Uuid {
        *self.id.as_uuid()
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn shows(&self) -> &[super::records::Show] {
        &self.shows
    }
}

/// A single search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Matched entity ID.
    pub id: uuid::Uuid,
    /// Matched entity name.
    pub name: String,
    /// Number of the entity's shows classified as upcoming.
    pub num_upcoming_shows: usize,
}

/// Search result: the true match count plus the hits in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Number of hits; always equals `results.len()`.
    pub count: usize,
    /// Matches in the order the entities were supplied.
    pub results: Vec<SearchHit>,
}

/// Filters `entities` to those whose name contains `term`
/// case-insensitively. An empty `term` matches everything.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] from the
/// upcoming-count derivation of a matched entity.
pub fn search<E: Searchable>(
    entities: &[E],
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchOutcome, DirectoryError> {
    let needle = term.to_lowercase();
    let mut results = Vec::new();

    for entity in entities {
        if !entity.name().to_lowercase().contains(&needle) {
            continue;
        }
        results.push(SearchHit {
            id: entity.id(),
            name: entity.name().to_string(),
            num_upcoming_shows: timing::count_upcoming(entity.shows(), now)?,
        });
    }

    Ok(SearchOutcome {
        count: results.len(),
        results,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ids::{ArtistId, ShowId, VenueId};
    use crate::domain::records::Show;

    fn now() -> DateTime<Utc> {
        let Ok(dt) = DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z") else {
            panic!("bad fixture timestamp");
        };
        dt.with_timezone(&Utc)
    }

    fn venue(name: &str, start_times: &[&str]) -> Venue {
        let id = VenueId::new();
        Venue {
            id,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "123 Main St".to_string(),
            phone: None,
            genres: vec![],
            image_link: None,
            website: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            shows: start_times
                .iter()
                .map(|t| Show {
                    id: ShowId::new(),
                    venue_id: id,
                    artist_id: ArtistId::new(),
                    start_time: (*t).to_string(),
                })
                .collect(),
        }
    }

    fn artist(name: &str) -> Artist {
        Artist {
            id: ArtistId::new(),
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec![],
            image_link: None,
            website: None,
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
            shows: vec![],
        }
    }

    fn venue_fixture() -> Vec<Venue> {
        vec![
            venue("The Musical Hop", &["2026-06-15T20:00:00Z"]),
            venue("Park Square Live Music & Coffee", &[]),
        ]
    }

    #[test]
    fn substring_match_is_exact_when_unique() {
        let venues = venue_fixture();
        let Ok(outcome) = search(&venues, "Hop", now()) else {
            panic!("search failed");
        };
        assert_eq!(outcome.count, 1);
        let names: Vec<&str> = outcome.results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["The Musical Hop"]);
    }

    #[test]
    fn substring_match_returns_all_hits_in_input_order() {
        let venues = venue_fixture();
        let Ok(outcome) = search(&venues, "Music", now()) else {
            panic!("search failed");
        };
        assert_eq!(outcome.count, 2);
        let names: Vec<&str> = outcome.results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            ["The Musical Hop", "Park Square Live Music & Coffee"]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let artists = vec![
            artist("Guns N Petals"),
            artist("Matt Quevado"),
            artist("The Wild Sax Band"),
        ];
        let Ok(outcome) = search(&artists, "band", now()) else {
            panic!("search failed");
        };
        assert_eq!(outcome.count, 1);
        let names: Vec<&str> = outcome.results.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["The Wild Sax Band"]);
    }

    #[test]
    fn empty_term_matches_every_entity() {
        let venues = venue_fixture();
        let Ok(outcome) = search(&venues, "", now()) else {
            panic!("search failed");
        };
        assert_eq!(outcome.count, venues.len());
        assert_eq!(outcome.results.len(), venues.len());
    }

    #[test]
    fn count_always_equals_results_len() {
        let venues = venue_fixture();
        for term in ["Hop", "Music", "zzz", ""] {
            let Ok(outcome) = search(&venues, term, now()) else {
                panic!("search failed for {term:?}");
            };
            assert_eq!(outcome.count, outcome.results.len());
        }
    }

    #[test]
    fn hits_carry_upcoming_show_counts() {
        let venues = venue_fixture();
        let Ok(outcome) = search(&venues, "Hop", now()) else {
            panic!("search failed");
        };
        let Some(hit) = outcome.results.first() else {
            panic!("expected a hit");
        };
        assert_eq!(hit.num_upcoming_shows, 1);
    }

    #[test]
    fn no_match_is_an_empty_outcome_not_an_error() {
        let venues = venue_fixture();
        let Ok(outcome) = search(&venues, "velodrome", now()) else {
            panic!("search failed");
        };
        assert_eq!(outcome.count, 0);
        assert!(outcome.results.is_empty());
    }
}
