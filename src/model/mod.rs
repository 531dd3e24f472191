//! Data model for BOM analysis.
//!
//! - [`Table`]: raw and canonical tabular BOMs (optional text cells)
//! - [`OptimizedBom`]: the aggregated, part-number-sorted BOM
//! - [`SupplierCatalog`]: multi-supplier price data
//! - [`Coerced`] / [`coerce_number`]: the one numeric parser every stage shares

mod bom;
mod field;
mod supplier;
mod table;

pub use bom::{BomLine, OptimizedBom, OPTIMIZED, SOURCE_ROWS};
pub use field::{coerce_json_number, coerce_number, format_number, round_to, Coerced};
pub use supplier::{Supplier, SupplierCatalog};
pub use table::{
    Cell, RowView, Table, CANONICAL_COLUMNS, DESCRIPTION, LIFECYCLE_STATUS, MANUFACTURER,
    PART_NUMBER, QUANTITY, ROHS,
};
