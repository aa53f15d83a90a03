//! Denormalized tabular results for display.
//!
//! # Responsibility
//! - Carry column names plus text cells for select-all views, fixed reports
//!   and the custom join.
//! - Render SQLite values to display text in one place.

use rusqlite::types::ValueRef;
use rusqlite::{Params, Statement};
use serde::Serialize;

/// Column headers plus rows of display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A typed report row that can be flattened into a [`TableView`].
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TableView {
    /// Builds a view from typed rows, using the row type's headers.
    pub fn from_rows<T: TableRow>(rows: &[T]) -> Self {
        Self {
            columns: T::HEADERS.iter().map(|header| header.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    /// Runs `stmt` and captures every column of every row.
    pub fn from_statement(stmt: &mut Statement<'_>, params: impl Params) -> rusqlite::Result<Self> {
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query(params)?;
        while let Some(row) = cursor.next()? {
            let mut cells = Vec::with_capacity(width);
            for index in 0..width {
                cells.push(render_value(row.get_ref(index)?));
            }
            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Formats a price or other real value with two decimals.
pub fn format_real(value: f64) -> String {
    format!("{value:.2}")
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(number) => number.to_string(),
        ValueRef::Real(number) => format_real(number),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}
