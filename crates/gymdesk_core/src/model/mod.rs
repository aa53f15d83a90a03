//! Gym domain model.
//!
//! # Responsibility
//! - Define persisted records and insert inputs for the six gym tables.
//! - Define closed enumerations for tables, statuses and updatable fields.
//!
//! # Invariants
//! - Records are identified by SQLite integer primary keys (`RecordId`).
//! - Insert inputs expose `validate()`, a presence check that runs before
//!   any SQL.

use thiserror::Error;

pub mod booking;
pub mod class;
pub mod field;
pub mod member;
pub mod membership;
pub mod plan;
pub mod status;
pub mod table;
pub mod trainer;

/// Integer primary key of any gym row.
pub type RecordId = i64;

/// Local input error, reported before the database is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("select at least one table")]
    EmptySelection,
}

pub(crate) fn require_present(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
