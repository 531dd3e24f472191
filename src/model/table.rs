//! Tabular BOM representations.
//!
//! A [`Table`] is a column-ordered grid of optional text cells. The same type
//! backs both the raw table read from disk and the canonical table produced by
//! the schema normalizer; the canonical form simply guarantees the presence of
//! every name in [`CANONICAL_COLUMNS`].

use serde::{Deserialize, Serialize};

/// Canonical part number column.
pub const PART_NUMBER: &str = "PartNumber";
/// Canonical quantity column.
pub const QUANTITY: &str = "Quantity";
/// Canonical manufacturer column.
pub const MANUFACTURER: &str = "Manufacturer";
/// Canonical description column.
pub const DESCRIPTION: &str = "Description";
/// Canonical lifecycle status column.
pub const LIFECYCLE_STATUS: &str = "LifecycleStatus";
/// Canonical RoHS compliance column.
pub const ROHS: &str = "RoHS";

/// Columns every downstream engine depends on, in output order.
pub const CANONICAL_COLUMNS: [&str; 6] = [
    PART_NUMBER,
    QUANTITY,
    MANUFACTURER,
    DESCRIPTION,
    LIFECYCLE_STATUS,
    ROHS,
];

/// A single table cell. `None` is the null marker.
pub type Cell = Option<String>;

/// Column-ordered table of optional text cells.
///
/// Rows are stored positionally; every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and rows, padding or truncating each row to
    /// the header width.
    #[must_use]
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row, padding with nulls or truncating to the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column with this exact name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell text at `(row, column)`; `None` for null cells and unknown columns.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Iterate rows as [`RowView`]s.
    pub fn iter(&self) -> impl Iterator<Item = RowView<'_>> {
        (0..self.rows.len()).map(move |index| RowView { table: self, index })
    }

    /// Return a copy with columns renamed by `rename`, which receives each
    /// column's position and name and returns the new name.
    #[must_use]
    pub fn with_renamed_columns<F>(&self, mut rename: F) -> Self
    where
        F: FnMut(usize, &str) -> String,
    {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| rename(i, c))
            .collect();
        Self {
            columns,
            rows: self.rows.clone(),
        }
    }

    /// Append a column filled with nulls. Existing columns are left untouched.
    ///
    /// Returns `false` when the column already exists.
    pub fn add_null_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(None);
        }
        true
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> RowView<'a> {
    /// Zero-based position of the row in its table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Cell text for a column; `None` for null cells and unknown columns.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.cell(self.index, column)
    }
}
