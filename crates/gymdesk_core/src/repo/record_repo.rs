//! Table-generic record operations.
//!
//! # Responsibility
//! - Delete one row by id, honoring SQL cascade/restrict rules.
//! - Select all rows of a table for display.
//! - Apply one typed single-column update or a clear-field placeholder.
//!
//! # Invariants
//! - Identifiers come from [`Table`], [`FieldUpdate`] and [`ClearField`];
//!   only values are bound from input.

use super::{RepoError, RepoResult};
use crate::model::field::{ClearField, FieldUpdate, FieldValue};
use crate::model::table::Table;
use crate::model::RecordId;
use crate::view::TableView;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

/// Repository interface for operations shared by every table.
pub trait RecordRepository {
    /// Deletes at most one row. `NotFound` when no row matched.
    fn delete_record(&self, table: Table, id: RecordId) -> RepoResult<()>;
    /// Returns every column of every row ordered by id.
    fn select_all(&self, table: Table) -> RepoResult<TableView>;
    fn count_rows(&self, table: Table) -> RepoResult<u64>;
    /// Sets one column of one row. `NotFound` when no row matched.
    fn update_field<F: FieldUpdate>(&self, id: RecordId, field: &F) -> RepoResult<()>;
    /// Overwrites one clearable column with its placeholder.
    fn clear_field(&self, field: ClearField, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed generic record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn set_column(&self, table: Table, column: &str, id: RecordId, value: Value) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2;",
            table.sql_name(),
            column,
            table.id_column()
        );
        let changed = self.conn.execute(&sql, params![value, id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table, id });
        }

        Ok(())
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn delete_record(&self, table: Table, id: RecordId) -> RepoResult<()> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1;",
            table.sql_name(),
            table.id_column()
        );
        let changed = self.conn.execute(&sql, [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table, id });
        }

        Ok(())
    }

    fn select_all(&self, table: Table) -> RepoResult<TableView> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT * FROM {} ORDER BY {} ASC;",
            table.sql_name(),
            table.id_column()
        ))?;
        Ok(TableView::from_statement(&mut stmt, [])?)
    }

    fn count_rows(&self, table: Table) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", table.sql_name()),
            [],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }

    fn update_field<F: FieldUpdate>(&self, id: RecordId, field: &F) -> RepoResult<()> {
        let value = match field.value() {
            FieldValue::Text(text) => Value::Text(text),
            FieldValue::Integer(number) => Value::Integer(number),
            FieldValue::Real(number) => Value::Real(number),
        };
        self.set_column(F::TABLE, field.column(), id, value)
    }

    fn clear_field(&self, field: ClearField, id: RecordId) -> RepoResult<()> {
        self.set_column(
            field.table(),
            field.column(),
            id,
            Value::Text(field.placeholder().to_string()),
        )
    }
}
