//! Core of the gym front desk: schema, sample data, repositories, reports
//! and the desk service.
//! Constraint rules live in the SQLite schema; this crate surfaces them.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod seed;
pub mod service;
pub mod view;

pub use db::{create_schema, open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::field::{ClearField, FieldSpec, FieldUpdate, FieldValue};
pub use model::table::Table;
pub use model::{RecordId, ValidationError};
pub use repo::{ConstraintKind, ConstraintViolation, RepoError, RepoResult};
pub use report::ReportKind;
pub use seed::seed_sample_data;
pub use service::{ActionOutcome, DeskCounts, GymDesk};
pub use view::{TableRow, TableView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
