//! **Deterministic cost and supply-chain risk analysis for hardware Bills of Materials.**
//!
//! `bomer` takes a BOM spreadsheet with arbitrary column names, maps it onto a
//! canonical schema, reports data-quality issues, merges duplicate part
//! numbers, prices the result against a multi-supplier catalog and scores its
//! sourcing risk. Every stage is a pure function of its inputs, so the same
//! files always produce byte-identical artifacts.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the tabular BOM ([`Table`]), the aggregated [`OptimizedBom`]
//!   and the [`SupplierCatalog`].
//! - **[`parsers`]**: CSV and JSON loaders for the two input files.
//! - **[`schema`]**: header normalization onto the canonical columns and
//!   non-mutating validation.
//! - **[`engines`]**: the optimizer plus the cost and risk engines.
//! - **[`pipeline`]**: chains the stages and writes artifacts.
//! - **[`reports`]**: summary text, JSON and CSV renderers.
//! - **[`config`]**: `bomer.yaml` loading, validation and defaults.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use bomer::{run_analysis, BomerConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BomerConfig::default();
//!     let result = run_analysis(
//!         Path::new("data/bom.csv"),
//!         Some(Path::new("data/suppliers.json")),
//!         &config,
//!     )?;
//!
//!     println!(
//!         "{} parts, total {} {}, risk {}",
//!         result.part_count(),
//!         result.cost.total_cost,
//!         result.cost.currency,
//!         result.risk.risk_score
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ### Working with in-memory tables
//!
//! ```
//! use bomer::model::{Supplier, SupplierCatalog, Table};
//! use bomer::{analyze_tables, BomerConfig};
//!
//! let raw = Table::from_rows(
//!     vec!["MPN".into(), "Qty".into()],
//!     vec![vec![Some("R1".into()), Some("4".into())]],
//! );
//! let catalog = SupplierCatalog::new(None, vec![Supplier::new("Acme", [("R1", 0.25)])]);
//!
//! let result = analyze_tables(&raw, &catalog, &BomerConfig::default()).unwrap();
//! assert_eq!(result.cost.total_cost, 1.0);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Row counts and quantities move between usize and f64 in ratio math
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod engines;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod schema;

// Re-export main types for convenience
pub use config::{BomerConfig, BomerConfigBuilder, ConfigError, HeaderMatching, Validatable};
pub use engines::{
    analyze_costs, analyze_risk, optimize_bom, CostSummary, PriceIndex, RiskSummary, RiskWeights,
};
pub use error::{BomerError, ErrorContext, Result};
pub use model::{OptimizedBom, SupplierCatalog, Table};
pub use parsers::{load_bom, load_suppliers};
pub use pipeline::{analyze_tables, run_analysis, write_artifacts, AnalysisResult};
pub use reports::{ReportFormat, ReportGenerator};
pub use schema::{normalize_bom_columns, validate_bom, Issue, IssueKind};
