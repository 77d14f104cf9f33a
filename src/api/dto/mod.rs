//! Request/response DTOs for the REST API.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use artist_dto::{ArtistDetailResponse, ArtistPayload, ArtistRecordDto, ArtistSummaryDto};
pub use common_dto::{SearchHitDto, SearchParams, SearchResponse};
pub use show_dto::{
    ArtistShowDto, CreateShowRequest, ShowListingDto, ShowResponse, VenueShowDto,
};
pub use venue_dto::{AreaDto, AreaVenueDto, VenueDetailResponse, VenuePayload, VenueRecordDto};
