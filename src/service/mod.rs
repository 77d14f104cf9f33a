//! Service layer: request-level orchestration over storage and the
//! derivation core.

pub mod directory_service;

pub use directory_service::{ArtistDetail, DirectoryService, ShowListing, VenueDetail};
