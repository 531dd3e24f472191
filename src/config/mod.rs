//! Configuration module for bomer.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bomer::config::{load_config, BomerConfig};
//!
//! // Use defaults
//! let config = BomerConfig::default();
//!
//! // Use builder
//! let config = BomerConfig::builder()
//!     .currency("EUR")
//!     .risk_weights(0.5, 0.25, 0.25)
//!     .build();
//!
//! // Load from file (absent file -> defaults)
//! let (config, loaded_from) = load_config(None)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `bomer.yaml` file in your working directory or `~/.config/bomer/`:
//!
//! ```yaml
//! schema:
//!   aliases:
//!     "manufacturer part": PartNumber
//! cost:
//!   currency: EUR
//! risk:
//!   single_source_weight: 0.5
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_CURRENCY, DEFAULT_LIFECYCLE_WEIGHT, DEFAULT_MISSING_PRICE_WEIGHT, DEFAULT_OUTPUT_DIR,
    DEFAULT_SINGLE_SOURCE_WEIGHT, DEFAULT_SUPPLIERS_PATH,
};
pub use types::{
    AnalyzeConfig, AnalyzePaths, BehaviorConfig, BomerConfig, BomerConfigBuilder, CostConfig,
    HeaderMatching, OutputConfig, RiskConfig, SchemaConfig, SuppliersConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config, load_config_file, parse_config_str,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `bomer.yaml` configuration format.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(BomerConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
