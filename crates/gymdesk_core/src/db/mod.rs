//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the gym database.
//! - Create the six gym tables idempotently through ordered migrations.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Every table constraint (uniqueness, checks, cascade/restrict) lives in
//!   SQL, so invalid writes fail inside SQLite.
//! - Core code must not read/write gym data before migrations succeed.

use thiserror::Error;

pub mod migrations;
mod open;

pub use migrations::create_schema;
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}
