//! Domain layer: entity records and the derivation core.
//!
//! The derivation core is the set of pure, synchronous transformations
//! the listing, detail, and search pages are built from: classifying
//! shows as past or upcoming, partitioning an entity's shows, grouping
//! venues into areas, and filtering by name. Every function takes the
//! current instant as a parameter; nothing in here reads the clock or
//! touches storage.

pub mod aggregate;
pub mod areas;
pub mod ids;
pub mod records;
pub mod search;
pub mod timing;

pub use aggregate::{AggregatedShows, CounterpartDisplay, CounterpartLookup, CounterpartSide};
pub use areas::{Area, AreaVenue};
pub use ids::{ArtistId, ShowId, VenueId};
pub use records::{Artist, Show, Venue};
pub use search::{SearchHit, SearchOutcome, Searchable};
pub use timing::ShowTiming;
