//! Persistence layer: PostgreSQL storage for venues, artists, and shows.
//!
//! Provides [`postgres::PostgresStore`] over `sqlx::PgPool`. Reads hand
//! the service layer fully materialized domain records; schema lives in
//! the embedded `migrations/` directory and is applied at startup.

pub mod models;
pub mod postgres;
