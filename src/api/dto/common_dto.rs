//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::SearchOutcome;

/// Query parameters for the search endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring to match against names. Empty (or
    /// omitted) matches every entity.
    #[serde(default)]
    pub term: String,
}

/// A single search match.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHitDto {
    /// Matched entity ID.
    pub id: uuid::Uuid,
    /// Matched entity name.
    pub name: String,
    /// Number of the entity's upcoming shows.
    pub num_upcoming_shows: usize,
}

/// Response body for the search endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    /// True number of matches; always equals `data.len()`.
    pub count: usize,
    /// Matches in storage order.
    pub data: Vec<SearchHitDto>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            count: outcome.count,
            data: outcome
                .results
                .into_iter()
                .map(|hit| SearchHitDto {
                    id: hit.id,
                    name: hit.name,
                    num_upcoming_shows: hit.num_upcoming_shows,
                })
                .collect(),
        }
    }
}
