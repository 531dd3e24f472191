//! Input file loaders.
//!
//! - [`load_bom`]: CSV spreadsheet to a raw [`Table`](crate::model::Table)
//! - [`load_suppliers`]: JSON price catalog to a
//!   [`SupplierCatalog`](crate::model::SupplierCatalog)
//!
//! Both fail with a load error naming the file; nothing is partially loaded.

mod bom;
mod suppliers;

pub use bom::{load_bom, parse_bom_str, BOM_EXTENSION};
pub use suppliers::{load_suppliers, parse_suppliers_str};
