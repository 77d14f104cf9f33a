//! # marquee
//!
//! REST API gateway for a venue, artist, and show booking directory.
//!
//! Browsing pages are built from a small derivation core: shows are
//! classified as past or upcoming against an explicitly injected "now",
//! an entity's shows are stably partitioned with counterpart enrichment,
//! venues are grouped into (city, state) areas, and name search is a
//! case-insensitive substring filter. The core is pure and synchronous;
//! storage and HTTP are layered around it.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DirectoryService (service/)
//!     │
//!     ├── Derivation core (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
