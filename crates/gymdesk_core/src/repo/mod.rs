//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-table data access contracts (insert, get, list, update one
//!   field) plus table-generic record operations (delete, select all, clear).
//! - Isolate SQLite query details from the desk service.
//!
//! # Invariants
//! - Write paths call the input's `validate()` before SQL mutations.
//! - Constraint failures are surfaced with SQLite's message verbatim.
//! - Zero affected rows on update/delete is reported as `NotFound`.

use crate::db::DbError;
use crate::model::table::Table;
use crate::model::{RecordId, ValidationError};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{ffi, ErrorCode, Row};
use thiserror::Error;

pub mod booking_repo;
pub mod class_repo;
pub mod member_repo;
pub mod membership_repo;
pub mod plan_repo;
pub mod record_repo;
pub mod trainer_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for gym persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("{} not found: {id}", .table.entity())]
    NotFound { table: Table, id: RecordId },
    #[error("{0}")]
    Constraint(ConstraintViolation),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match ConstraintViolation::from_sqlite(&value) {
            Some(violation) => Self::Constraint(violation),
            None => Self::Db(DbError::Sqlite(value)),
        }
    }
}

/// Which declared constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
    Other,
}

/// A write rejected by a SQL constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub kind: ConstraintKind,
    /// SQLite's own message, e.g. `UNIQUE constraint failed: Members.Email`.
    pub message: String,
}

impl ConstraintViolation {
    fn from_sqlite(err: &rusqlite::Error) -> Option<Self> {
        let rusqlite::Error::SqliteFailure(failure, message) = err else {
            return None;
        };
        if failure.code != ErrorCode::ConstraintViolation {
            return None;
        }

        let kind = match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                ConstraintKind::Unique
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
            ffi::SQLITE_CONSTRAINT_CHECK => ConstraintKind::Check,
            ffi::SQLITE_CONSTRAINT_NOTNULL => ConstraintKind::NotNull,
            _ => ConstraintKind::Other,
        };

        Some(Self {
            kind,
            message: message.clone().unwrap_or_else(|| failure.to_string()),
        })
    }

    /// Whether this is a uniqueness failure on a column of `table`.
    pub fn is_unique_on(&self, table: Table) -> bool {
        self.kind == ConstraintKind::Unique
            && self.message.contains(&format!("{}.", table.sql_name()))
    }
}

pub(crate) fn read_date(row: &Row<'_>, column: &'static str) -> RepoResult<NaiveDate> {
    let text: String = row.get(column)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .map_err(|_| RepoError::InvalidData(format!("invalid date `{text}` in {column}")))
}

pub(crate) fn read_time(row: &Row<'_>, column: &'static str) -> RepoResult<NaiveTime> {
    let text: String = row.get(column)?;
    NaiveTime::parse_from_str(&text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
        .map_err(|_| RepoError::InvalidData(format!("invalid time `{text}` in {column}")))
}

pub(crate) fn read_label<T>(
    row: &Row<'_>,
    column: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> RepoResult<T> {
    let text: String = row.get(column)?;
    parse(&text).ok_or_else(|| RepoError::InvalidData(format!("invalid value `{text}` in {column}")))
}

pub(crate) fn read_flag(row: &Row<'_>, column: &'static str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
