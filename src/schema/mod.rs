//! Canonical BOM schema: header normalization and validation.
//!
//! [`normalize_bom_columns`] turns an arbitrary spreadsheet header into the
//! six canonical columns; [`validate_bom`] then reports data-quality issues
//! without touching the data.

mod aliases;
mod normalize;
mod validate;

pub use aliases::{header_key, AliasMap, DEFAULT_ALIASES};
pub use normalize::normalize_bom_columns;
pub use validate::{
    check_required_columns, issues, validate_bom, Issue, IssueKind, REQUIRED_COLUMNS,
    SCHEMA_FIELD,
};
