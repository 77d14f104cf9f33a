//! Time Classifier: decides whether a show is past or upcoming.
//!
//! Every classification takes the current instant as an explicit
//! parameter; nothing in this module reads the wall clock. A show whose
//! start time equals `now` exactly is classified [`ShowTiming::Upcoming`]
//! (the tie goes to the future, so no show is ever silently dropped from
//! both partitions).

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DirectoryError;

/// Classification of a show relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    /// The show started before the reference instant.
    Past,
    /// The show starts at or after the reference instant.
    Upcoming,
}

/// Naive timestamp formats accepted alongside RFC 3339. Naive values are
/// interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a stored `start_time` string into a UTC instant.
///
/// Accepts RFC 3339 (offset-aware) first, then naive
/// `2035-04-01 20:00:00` style values (and the `T`-separated variant),
/// treated as UTC.
///
/// # Errors
///
/// Returns [`DirectoryError::MalformedTimestamp`] when the value matches
/// none of the accepted formats. No coercion or default is ever applied.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, DirectoryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(DirectoryError::MalformedTimestamp {
        value: value.to_string(),
    })
}

/// Classifies a stored `start_time` against `now`.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] from parsing.
pub fn classify(start_time: &str, now: DateTime<Utc>) -> Result<ShowTiming, DirectoryError> {
    let start = parse_start_time(start_time)?;
    if start < now {
        Ok(ShowTiming::Past)
    } else {
        Ok(ShowTiming::Upcoming)
    }
}

/// Returns `true` iff the show starts at or after `now`.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] from parsing.
pub fn is_upcoming(start_time: &str, now: DateTime<Utc>) -> Result<bool, DirectoryError> {
    Ok(classify(start_time, now)? == ShowTiming::Upcoming)
}

/// Returns `true` iff the show started before `now`.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] from parsing.
pub fn is_past(start_time: &str, now: DateTime<Utc>) -> Result<bool, DirectoryError> {
    Ok(classify(start_time, now)? == ShowTiming::Past)
}

/// Counts the shows in `shows` classified as upcoming relative to `now`.
///
/// An empty slice yields 0, never an error.
///
/// # Errors
///
/// Propagates [`DirectoryError::MalformedTimestamp`] from parsing.
pub fn count_upcoming(
    shows: &[crate::domain::records::Show],
    now: DateTime<Utc>,
) -> Result<usize, DirectoryError> {
    let mut count = 0;
    for show in shows {
        if classify(&show.start_time, now)? == ShowTiming::Upcoming {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        let Ok(dt) = DateTime::parse_from_rfc3339(s) else {
            panic!("bad fixture timestamp: {s}");
        };
        dt.with_timezone(&Utc)
    }

    #[test]
    fn future_show_is_upcoming_not_past() {
        let now = at("2026-01-01T12:00:00Z");
        let Ok(upcoming) = is_upcoming("2026-06-15T20:00:00Z", now) else {
            panic!("parse failed");
        };
        let Ok(past) = is_past("2026-06-15T20:00:00Z", now) else {
            panic!("parse failed");
        };
        assert!(upcoming);
        assert!(!past);
    }

    #[test]
    fn earlier_show_is_past_not_upcoming() {
        let now = at("2026-01-01T12:00:00Z");
        let Ok(past) = is_past("2019-06-15 21:30:00", now) else {
            panic!("parse failed");
        };
        let Ok(upcoming) = is_upcoming("2019-06-15 21:30:00", now) else {
            panic!("parse failed");
        };
        assert!(past);
        assert!(!upcoming);
    }

    #[test]
    fn exact_tie_counts_as_upcoming() {
        let now = at("2026-01-01T12:00:00Z");
        assert_eq!(
            classify("2026-01-01T12:00:00Z", now).ok(),
            Some(ShowTiming::Upcoming)
        );
    }

    #[test]
    fn naive_space_separated_parses_as_utc() {
        let Ok(parsed) = parse_start_time("2035-04-01 20:00:00") else {
            panic!("naive format rejected");
        };
        assert_eq!(parsed, at("2035-04-01T20:00:00Z"));
    }

    #[test]
    fn naive_t_separated_parses_as_utc() {
        let Ok(parsed) = parse_start_time("2035-04-01T20:00:00") else {
            panic!("naive T format rejected");
        };
        assert_eq!(parsed, at("2035-04-01T20:00:00Z"));
    }

    #[test]
    fn offset_aware_input_normalizes_to_utc() {
        let Ok(parsed) = parse_start_time("2035-04-01T20:00:00-05:00") else {
            panic!("offset format rejected");
        };
        assert_eq!(parsed, at("2035-04-02T01:00:00Z"));
    }

    #[test]
    fn malformed_timestamp_is_a_distinct_error() {
        let now = at("2026-01-01T12:00:00Z");
        let err = classify("next tuesday", now);
        assert!(matches!(
            err,
            Err(DirectoryError::MalformedTimestamp { .. })
        ));
    }
}
