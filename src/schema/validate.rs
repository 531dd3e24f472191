//! Row-level data-quality checks on a canonical BOM table.
//!
//! The validator never mutates its input and never fails: everything it
//! finds is reported as an [`Issue`].

use crate::error::SchemaError;
use crate::model::{coerce_number, Coerced, RowView, Table, PART_NUMBER, QUANTITY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns the validator and optimizer cannot work without.
pub const REQUIRED_COLUMNS: [&str; 2] = [PART_NUMBER, QUANTITY];

/// Field name used for schema-level issues.
pub const SCHEMA_FIELD: &str = "schema";

/// Machine-readable issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// `PartNumber` or `Quantity` column absent; reported once, without a row.
    MissingColumns,
    EmptyPartNumber,
    InvalidQuantity,
    NonPositiveQuantity,
}

impl IssueKind {
    /// Stable snake_case code, as written to `issues.json`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingColumns => "missing_columns",
            Self::EmptyPartNumber => "empty_part_number",
            Self::InvalidQuantity => "invalid_quantity",
            Self::NonPositiveQuantity => "non_positive_quantity",
        }
    }

    /// Human-readable message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingColumns => "Required columns PartNumber and Quantity are missing.",
            Self::EmptyPartNumber => "PartNumber is empty.",
            Self::InvalidQuantity => "Quantity is missing or not numeric.",
            Self::NonPositiveQuantity => "Quantity must be positive.",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Zero-based source row; `None` for schema-level issues.
    pub row_index: Option<usize>,
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    fn row(index: usize, field: &str, kind: IssueKind) -> Self {
        Self {
            row_index: Some(index),
            field: field.to_string(),
            kind,
            message: kind.message().to_string(),
        }
    }

    fn schema() -> Self {
        Self {
            row_index: None,
            field: SCHEMA_FIELD.to_string(),
            kind: IssueKind::MissingColumns,
            message: IssueKind::MissingColumns.message().to_string(),
        }
    }

    /// True for the missing-columns issue.
    #[must_use]
    pub fn is_schema_level(&self) -> bool {
        self.row_index.is_none()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row_index {
            Some(row) => write!(f, "row {row}: {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Check that `PartNumber` and `Quantity` columns exist.
pub fn check_required_columns(table: &Table) -> Result<(), SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !table.has_column(c))
        .map(ToString::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns {
            required: REQUIRED_COLUMNS.iter().map(ToString::to_string).collect(),
            missing,
        })
    }
}

/// Lazily yield every issue in the table, in row order.
///
/// A table without the required columns yields exactly one schema-level
/// issue and no row issues.
pub fn issues(table: &Table) -> Box<dyn Iterator<Item = Issue> + '_> {
    if check_required_columns(table).is_err() {
        return Box::new(std::iter::once(Issue::schema()));
    }
    Box::new(table.iter().flat_map(|row| check_row(row).into_iter().flatten()))
}

/// Collect all issues.
#[must_use]
pub fn validate_bom(table: &Table) -> Vec<Issue> {
    let found: Vec<Issue> = issues(table).collect();
    tracing::debug!("Validation found {} issue(s) in {} row(s)", found.len(), table.row_count());
    found
}

/// A row yields at most one part-number and one quantity issue.
fn check_row(row: RowView<'_>) -> [Option<Issue>; 2] {
    let index = row.index();

    let part = row
        .get(PART_NUMBER)
        .map_or(true, |p| p.trim().is_empty())
        .then(|| Issue::row(index, PART_NUMBER, IssueKind::EmptyPartNumber));

    let quantity = match coerce_number(row.get(QUANTITY)) {
        Coerced::Value(q) if q <= 0.0 => {
            Some(Issue::row(index, QUANTITY, IssueKind::NonPositiveQuantity))
        }
        Coerced::Value(_) => None,
        Coerced::Missing | Coerced::Invalid => {
            Some(Issue::row(index, QUANTITY, IssueKind::InvalidQuantity))
        }
    };

    [part, quantity]
}
